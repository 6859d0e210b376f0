//! Configuration types for the PetFriends SDK.
//!
//! - [`TlsConfig`]: TLS settings (custom CA, insecure mode)
//! - [`EnvConfig`]: Client overrides read from the environment
//!
//! Everything else (base URL, timeouts, User-Agent) is set on
//! [`ClientBuilder`](crate::ClientBuilder).

mod env;
mod tls;

pub use env::EnvConfig;
pub use tls::TlsConfig;
