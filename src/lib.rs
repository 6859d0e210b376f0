//! # PetFriends Rust SDK
//!
//! Client for the PetFriends pet-catalog REST API.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use petfriends::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), petfriends::Error> {
//!     let client = Client::new()?;
//!
//!     // Exchange credentials for an API key
//!     let key = client
//!         .authenticate(&Credentials::new("user@example.com", "secret"))
//!         .await?
//!         .api_key()?;
//!
//!     // Add a pet, then list our own pets
//!     let created = client
//!         .create_pet(&key, &PetDetails::new("Tuzik", "Shaggy", "33"), "images/cat1.jpg")
//!         .await?;
//!     println!("{} {}", created.status_code(), created.body());
//!
//!     let pets = client.list_pets(&key, PetFilter::MyPets).await?.pets()?;
//!     println!("I own {} pets", pets.pets.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Status Is Data**: every operation returns `Ok(ApiResponse)` once the
//!   server answers, whatever the status; inspect `status_code()` and `body()`
//! - **Explicit Key**: the key from `authenticate` is passed to every later
//!   call; the client keeps no session
//! - **Photos Fail Early**: a missing photo file is an error before any
//!   request is sent
//!
//! ## Features
//!
//! - `rustls` (default): Use rustls for TLS
//! - `native-tls`: Use native TLS (OpenSSL on Linux, Secure Transport on macOS)
//! - `blocking` (default): Enable the synchronous [`blocking::Client`]
//! - `integration-tests`: Build the live test suite

#![cfg_attr(docsrs, feature(doc_cfg))]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod types;
pub mod user_agent;

// Synchronous facade
#[cfg(feature = "blocking")]
#[cfg_attr(docsrs, doc(cfg(feature = "blocking")))]
pub mod blocking;

// Testing utilities
pub mod testing;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use client::{Client, ClientBuilder};
pub use error::{Error, ErrorKind, Result};
pub use response::{ApiResponse, ResponseBody};
pub use types::{Pet, PetDetails, PetFilter, PetList, PetPhoto};

// Re-export auth types
pub use auth::{ApiKey, Credentials};

// Re-export config types
pub use config::{EnvConfig, TlsConfig};
