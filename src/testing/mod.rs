//! Testing utilities for suites that exercise a live PetFriends deployment.
//!
//! - [`Settings`]: Fixture credentials and the photo asset, from the environment
//! - [`TestContext`]: A fresh client plus settings for one test
//! - [`Expectation`]: The outcome a table-driven case expects from the server
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use petfriends::testing::{Expectation, TestContext};
//! use petfriends::{PetDetails, PetFilter};
//!
//! #[tokio::test]
//! async fn test_add_pet() -> anyhow::Result<()> {
//!     let ctx = TestContext::new()?;
//!     let key = ctx.api_key().await?;
//!
//!     let response = ctx
//!         .client
//!         .create_pet(&key, &PetDetails::new("Tuzik", "Shaggy", "33"), ctx.photo())
//!         .await?;
//!     Expectation::Accepted.check(&response)?;
//!     Ok(())
//! }
//! ```

mod context;
mod expectation;
mod settings;

pub use context::TestContext;
pub use expectation::Expectation;
pub use settings::{
    EMAIL_VAR, INVALID_EMAIL_VAR, INVALID_PASSWORD_VAR, PASSWORD_VAR, PHOTO_VAR, Settings,
};
