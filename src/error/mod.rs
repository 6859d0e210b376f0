//! Error types for the PetFriends SDK.
//!
//! ## Key Invariant
//!
//! A server answer is never an `Err`. Every operation returns
//! `Ok(ApiResponse)` once the server has responded, whatever the status.
//! [`Error`] is reserved for failures that prevent the exchange from
//! completing (connection, timeout) and for local preconditions (an
//! unreadable photo file, invalid configuration).
//!
//! ```rust,ignore
//! // A rejected key is data, not an error
//! let response = client.list_pets(&ApiKey::new("12345"), PetFilter::All).await?;
//! assert_ne!(response.status_code(), 200);
//!
//! // An unreachable server is an error
//! let err = unreachable.list_pets(&key, PetFilter::All).await.unwrap_err();
//! assert!(err.is_transport());
//! ```

mod base;
mod kind;

pub use base::Error;
pub(crate) use base::map_reqwest_error;
pub use kind::ErrorKind;

/// A specialized `Result` type for PetFriends operations.
pub type Result<T> = std::result::Result<T, Error>;
