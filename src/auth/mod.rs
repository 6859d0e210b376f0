//! Authentication types for the PetFriends API.
//!
//! PetFriends authenticates in two steps:
//!
//! 1. [`Credentials`] (email + password) are exchanged for an API key via
//!    [`Client::authenticate`](crate::Client::authenticate).
//! 2. The [`ApiKey`] is echoed in the `auth_key` header on every later call.
//!
//! ```rust,ignore
//! use petfriends::prelude::*;
//!
//! let client = Client::new()?;
//! let response = client
//!     .authenticate(&Credentials::new("user@example.com", "secret"))
//!     .await?;
//!
//! let key = response.api_key()?;
//! let pets = client.list_pets(&key, PetFilter::MyPets).await?;
//! ```
//!
//! The client never stores either secret. The caller holds the key for as
//! long as it needs it; expiry is enforced only by the server.

mod api_key;
mod credentials;

pub use api_key::ApiKey;
pub use credentials::Credentials;
