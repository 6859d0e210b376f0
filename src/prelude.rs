//! Prelude module for convenient imports.
//!
//! ```rust
//! use petfriends::prelude::*;
//! ```
//!
//! This provides access to:
//! - Client types
//! - Response and error types
//! - Credentials and API key
//! - Pet data types

pub use crate::{
    auth::{ApiKey, Credentials},
    client::{Client, ClientBuilder},
    config::TlsConfig,
    error::{Error, ErrorKind, Result},
    response::{ApiResponse, ResponseBody},
    types::{Pet, PetDetails, PetFilter, PetList},
};
