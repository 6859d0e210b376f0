//! Synchronous facade over [`Client`](crate::Client).
//!
//! Each call drives the async operation to completion on a private
//! current-thread runtime, so one request is in flight at a time. Do not
//! call these methods from inside an async runtime; use the async client
//! there instead.
//!
//! ```rust,ignore
//! use petfriends::blocking;
//! use petfriends::{Credentials, PetFilter};
//!
//! let client = blocking::Client::new()?;
//! let key = client
//!     .authenticate(&Credentials::new("user@example.com", "secret"))?
//!     .api_key()?;
//! let pets = client.list_pets(&key, PetFilter::MyPets)?.pets()?;
//! ```

use std::path::Path;
use std::time::Duration;

use tokio::runtime::Runtime;
use url::Url;

use crate::auth::{ApiKey, Credentials};
use crate::response::ApiResponse;
use crate::types::{PetDetails, PetFilter};
use crate::{ClientBuilder, Error};

/// Blocking PetFriends client.
pub struct Client {
    client: crate::Client,
    runtime: Runtime,
}

impl Client {
    /// Creates a blocking client for the public deployment.
    pub fn new() -> Result<Self, Error> {
        ClientBuilder::new().build_blocking()
    }

    /// Creates a new client builder; finish with
    /// [`build_blocking`](ClientBuilder::build_blocking).
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn from_async(client: crate::Client) -> Result<Self, Error> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                Error::internal(format!("failed to start runtime: {}", e)).with_source(e)
            })?;
        Ok(Self { client, runtime })
    }

    /// Returns the base URL of the client.
    pub fn base_url(&self) -> &Url {
        self.client.base_url()
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.client.timeout()
    }

    /// Returns the underlying async client.
    pub fn as_async(&self) -> &crate::Client {
        &self.client
    }

    /// See [`crate::Client::authenticate`].
    pub fn authenticate(&self, credentials: &Credentials) -> Result<ApiResponse, Error> {
        self.runtime.block_on(self.client.authenticate(credentials))
    }

    /// See [`crate::Client::list_pets`].
    pub fn list_pets(&self, key: &ApiKey, filter: PetFilter) -> Result<ApiResponse, Error> {
        self.runtime.block_on(self.client.list_pets(key, filter))
    }

    /// See [`crate::Client::create_pet`].
    pub fn create_pet(
        &self,
        key: &ApiKey,
        details: &PetDetails,
        photo_path: impl AsRef<Path>,
    ) -> Result<ApiResponse, Error> {
        self.runtime
            .block_on(self.client.create_pet(key, details, photo_path))
    }

    /// See [`crate::Client::create_pet_without_photo`].
    pub fn create_pet_without_photo(
        &self,
        key: &ApiKey,
        details: &PetDetails,
    ) -> Result<ApiResponse, Error> {
        self.runtime
            .block_on(self.client.create_pet_without_photo(key, details))
    }

    /// See [`crate::Client::update_pet`].
    pub fn update_pet(
        &self,
        key: &ApiKey,
        pet_id: &str,
        details: &PetDetails,
    ) -> Result<ApiResponse, Error> {
        self.runtime
            .block_on(self.client.update_pet(key, pet_id, details))
    }

    /// See [`crate::Client::attach_photo`].
    pub fn attach_photo(
        &self,
        key: &ApiKey,
        pet_id: &str,
        photo_path: impl AsRef<Path>,
    ) -> Result<ApiResponse, Error> {
        self.runtime
            .block_on(self.client.attach_photo(key, pet_id, photo_path))
    }

    /// See [`crate::Client::delete_pet`].
    pub fn delete_pet(&self, key: &ApiKey, pet_id: &str) -> Result<ApiResponse, Error> {
        self.runtime.block_on(self.client.delete_pet(key, pet_id))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("blocking::Client")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}
