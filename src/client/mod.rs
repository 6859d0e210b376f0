//! The PetFriends API client.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use petfriends::prelude::*;
//!
//! let client = Client::new()?;
//!
//! let key = client
//!     .authenticate(&Credentials::new("user@example.com", "secret"))
//!     .await?
//!     .api_key()?;
//!
//! let response = client
//!     .create_pet(&key, &PetDetails::new("Tuzik", "Shaggy", "33"), "images/cat1.jpg")
//!     .await?;
//! assert_eq!(response.status_code(), 200);
//! assert_eq!(response.pet()?.name, "Tuzik");
//! ```

mod builder;
mod inner;
mod operations;

pub use builder::{ClientBuilder, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT};

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::Error;

/// Async client for the PetFriends API.
///
/// Each operation is one independent request/response cycle. The client
/// holds no per-user state: the API key returned by
/// [`authenticate`](Client::authenticate) is passed explicitly to every
/// later call.
///
/// ## Result Contract
///
/// - `Ok(ApiResponse)`: the server answered, whatever the status
/// - `Err(Error)`: the exchange could not complete (connection, timeout) or
///   a local precondition failed (photo file, header encoding)
///
/// ## Thread Safety
///
/// `Client` is `Clone` and cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct Client {
    inner: Arc<inner::ClientInner>,
}

impl Client {
    /// Creates a client for the public deployment with default settings.
    pub fn new() -> Result<Self, Error> {
        ClientBuilder::new().build()
    }

    /// Creates a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the base URL of the client.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    pub(crate) fn from_inner(inner: Arc<inner::ClientInner>) -> Self {
        Self { inner }
    }

    pub(crate) fn inner(&self) -> &inner::ClientInner {
        &self.inner
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}
