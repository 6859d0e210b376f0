//! Email/password credentials.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Email and password pair used to obtain an [`ApiKey`](super::ApiKey).
///
/// Values are passed through verbatim: an empty email or password is a
/// legitimate input when probing how the server rejects bad logins.
///
/// The password is wiped from memory on drop and never appears in `Debug`
/// output.
///
/// ## Example
///
/// ```rust
/// use petfriends::Credentials;
///
/// let creds = Credentials::new("user@example.com", "secret");
/// assert_eq!(creds.email(), "user@example.com");
/// assert!(!format!("{:?}", creds).contains("secret"));
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Creates a new credentials pair.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
