//! Live tests for the PetFriends Rust SDK.
//!
//! These tests talk to a real PetFriends deployment and create, change and
//! delete pets owned by the fixture account.
//!
//! # Running Tests
//!
//! ```bash
//! export PETFRIENDS_EMAIL=you@example.com
//! export PETFRIENDS_PASSWORD=...
//!
//! # Single-threaded: the pet tests share the account's pet list
//! cargo test --features integration-tests --test integration -- --test-threads=1
//!
//! # Include the ignored destructive case
//! cargo test --features integration-tests --test integration -- --test-threads=1 --include-ignored
//! ```
//!
//! # Environment Variables
//!
//! - `PETFRIENDS_EMAIL`, `PETFRIENDS_PASSWORD`: The fixture account (required)
//! - `PETFRIENDS_INVALID_EMAIL`, `PETFRIENDS_INVALID_PASSWORD`: Rejected credentials
//! - `PETFRIENDS_PHOTO`: Photo to upload (default: `tests/images/cat1.jpg`)
//! - `PETFRIENDS_BASE_URL`: Deployment to test (default: the public one)
//! - `RUST_LOG`: Log filter, e.g. `petfriends=debug`

mod anomaly_tests;
mod auth_tests;
mod blocking_tests;
mod common;
mod pet_tests;
