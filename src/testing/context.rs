//! Per-test client context.

use std::path::Path;

use super::Settings;
use crate::{ApiKey, Client, ClientBuilder, Error, PetFilter, PetList};

/// A fresh client and fixture settings for one test.
///
/// Every call to [`new`](Self::new) builds its own client, so tests never
/// share connection state or a cached key.
#[derive(Debug, Clone)]
pub struct TestContext {
    /// Client configured from `PETFRIENDS_*` variables.
    pub client: Client,

    /// Fixture settings.
    pub settings: Settings,
}

impl TestContext {
    /// Builds a context from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the fixture account is not set or a
    /// client override is malformed.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            client: ClientBuilder::from_env()?.build()?,
            settings: Settings::from_env()?,
        })
    }

    /// Builds a context around an existing client.
    pub fn with_client(client: Client, settings: Settings) -> Self {
        Self { client, settings }
    }

    /// Returns the photo asset path.
    pub fn photo(&self) -> &Path {
        &self.settings.photo
    }

    /// Authenticates the fixture account and returns its key.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidResponse`](crate::ErrorKind::InvalidResponse)
    /// error if the server does not answer 200 with a key, or any transport
    /// error.
    pub async fn api_key(&self) -> Result<ApiKey, Error> {
        let response = self.client.authenticate(&self.settings.valid).await?;
        if !response.is_ok() {
            return Err(Error::invalid_response(format!(
                "authentication answered {}",
                response.status_code()
            )));
        }
        response.api_key()
    }

    /// Lists the pets owned by the fixture account.
    pub async fn my_pets(&self, key: &ApiKey) -> Result<PetList, Error> {
        self.client.list_pets(key, PetFilter::MyPets).await?.pets()
    }
}
