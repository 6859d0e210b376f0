//! Client overrides read from environment variables.

use std::time::Duration;

use crate::Error;

/// Environment variable holding the API base URL.
pub const BASE_URL_VAR: &str = "PETFRIENDS_BASE_URL";

/// Environment variable holding the request timeout in whole seconds.
pub const TIMEOUT_VAR: &str = "PETFRIENDS_TIMEOUT_SECS";

/// Environment variable enabling insecure mode (`1`/`true`/`yes`).
pub const INSECURE_VAR: &str = "PETFRIENDS_INSECURE";

/// Client settings taken from the environment.
///
/// | Variable                  | Effect                                 |
/// |---------------------------|----------------------------------------|
/// | `PETFRIENDS_BASE_URL`     | Replaces the default base URL          |
/// | `PETFRIENDS_TIMEOUT_SECS` | Per-request timeout, whole seconds     |
/// | `PETFRIENDS_INSECURE`     | `1`/`true`/`yes` enables insecure mode |
///
/// Unset or empty variables leave the builder default in place.
///
/// ```rust
/// use std::time::Duration;
/// use petfriends::EnvConfig;
///
/// let config = EnvConfig::from_lookup(|name| match name {
///     "PETFRIENDS_TIMEOUT_SECS" => Some("5".to_string()),
///     _ => None,
/// })
/// .unwrap();
///
/// assert_eq!(config.timeout, Some(Duration::from_secs(5)));
/// assert!(config.base_url.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// Base URL override.
    pub base_url: Option<String>,

    /// Request timeout override.
    pub timeout: Option<Duration>,

    /// Whether insecure mode was requested.
    pub insecure: bool,
}

impl EnvConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let timeout = read(TIMEOUT_VAR)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|e| {
                        Error::configuration(format!(
                            "{} must be a whole number of seconds, got {:?}",
                            TIMEOUT_VAR, raw
                        ))
                        .with_source(e)
                    })
            })
            .transpose()?;

        let insecure = match read(INSECURE_VAR) {
            None => false,
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                Error::configuration(format!(
                    "{} must be a boolean flag, got {:?}",
                    INSECURE_VAR, raw
                ))
            })?,
        };

        Ok(Self {
            base_url: read(BASE_URL_VAR).map(|url| url.trim().to_string()),
            timeout,
            insecure,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
