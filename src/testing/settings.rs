//! Fixture settings read from environment variables.

use std::path::{Path, PathBuf};

use crate::{Credentials, Error};

/// Email of the registered test account.
pub const EMAIL_VAR: &str = "PETFRIENDS_EMAIL";

/// Password of the registered test account.
pub const PASSWORD_VAR: &str = "PETFRIENDS_PASSWORD";

/// Email that is not registered.
pub const INVALID_EMAIL_VAR: &str = "PETFRIENDS_INVALID_EMAIL";

/// Password that does not match the account.
pub const INVALID_PASSWORD_VAR: &str = "PETFRIENDS_INVALID_PASSWORD";

/// Photo asset used for uploads.
pub const PHOTO_VAR: &str = "PETFRIENDS_PHOTO";

const DEFAULT_INVALID_EMAIL: &str = "nobody@petfriends.invalid";

const DEFAULT_INVALID_PASSWORD: &str = "not-the-password";

const DEFAULT_PHOTO: &str = "tests/images/cat1.jpg";

/// Credentials and assets the live suite runs with.
///
/// | Variable                      | Required | Default                    |
/// |-------------------------------|----------|----------------------------|
/// | `PETFRIENDS_EMAIL`            | yes      |                            |
/// | `PETFRIENDS_PASSWORD`         | yes      |                            |
/// | `PETFRIENDS_INVALID_EMAIL`    | no       | an unregistered address    |
/// | `PETFRIENDS_INVALID_PASSWORD` | no       | a non-matching password    |
/// | `PETFRIENDS_PHOTO`            | no       | `tests/images/cat1.jpg`    |
///
/// Relative photo paths are resolved against the crate root, so the suite
/// does not depend on the working directory.
#[derive(Debug, Clone)]
pub struct Settings {
    /// The registered account.
    pub valid: Credentials,

    /// Unregistered email with the valid password.
    pub invalid_email: Credentials,

    /// Valid email with a wrong password.
    pub invalid_password: Credentials,

    /// Both fields empty.
    pub blank: Credentials,

    /// Absolute path of the photo asset.
    pub photo: PathBuf,
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the variable when the account
    /// email or password is missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require = |name: &str| {
            read(name).ok_or_else(|| {
                Error::configuration(format!("{} must be set for the live test suite", name))
            })
        };

        let email = require(EMAIL_VAR)?;
        let password = require(PASSWORD_VAR)?;
        let invalid_email =
            read(INVALID_EMAIL_VAR).unwrap_or_else(|| DEFAULT_INVALID_EMAIL.to_string());
        let invalid_password =
            read(INVALID_PASSWORD_VAR).unwrap_or_else(|| DEFAULT_INVALID_PASSWORD.to_string());
        let photo = resolve_photo(read(PHOTO_VAR).as_deref().unwrap_or(DEFAULT_PHOTO));

        Ok(Self {
            invalid_email: Credentials::new(invalid_email, password.clone()),
            invalid_password: Credentials::new(email.clone(), invalid_password),
            valid: Credentials::new(email, password),
            blank: Credentials::new("", ""),
            photo,
        })
    }
}

fn resolve_photo(raw: &str) -> PathBuf {
    let path = Path::new(raw.trim());
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
    }
}
