//! The opaque key returned by `GET api/key`.

use std::fmt;

use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// API key returned by the authentication endpoint.
///
/// Sent as the `auth_key` header on every pet operation. The key is opaque
/// to the client: there is no expiry tracking and no refresh.
///
/// ## Example
///
/// ```rust
/// use petfriends::ApiKey;
///
/// // A deliberately bogus key, useful for rejection tests
/// let key = ApiKey::new("12345");
/// assert_eq!(key.as_str(), "12345");
/// assert_eq!(format!("{:?}", key), "ApiKey([REDACTED])");
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a raw key string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&format_args!("[REDACTED]")).finish()
    }
}

impl<S: Into<String>> From<S> for ApiKey {
    fn from(key: S) -> Self {
        Self::new(key)
    }
}
