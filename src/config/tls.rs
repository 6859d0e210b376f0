//! TLS configuration for secure connections.

use std::path::PathBuf;

use crate::Error;

/// Configuration for TLS connections.
///
/// By default, the client uses system root certificates and validates
/// server certificates. A custom CA is useful for sandboxed deployments of
/// the API behind a private certificate authority.
///
/// ## Example: Custom CA
///
/// ```rust
/// use petfriends::TlsConfig;
///
/// let config = TlsConfig::builder()
///     .ca_cert_file("/path/to/ca.crt")
///     .build();
/// assert!(config.has_custom_ca());
/// ```
#[derive(Debug, Clone, Default, bon::Builder)]
pub struct TlsConfig {
    /// Custom CA certificate file path.
    #[builder(into)]
    pub ca_cert_file: Option<PathBuf>,

    /// Custom CA certificate PEM data.
    #[builder(into)]
    pub ca_cert_pem: Option<String>,

    /// Whether to skip certificate verification.
    ///
    /// **WARNING**: This is insecure and should only be used for local development.
    #[builder(default = false)]
    pub skip_verification: bool,
}

impl TlsConfig {
    /// Creates an insecure TLS config that skips verification.
    ///
    /// **WARNING**: This makes connections vulnerable to man-in-the-middle attacks.
    /// Only use this against local test deployments.
    pub fn insecure() -> Self {
        Self::builder().skip_verification(true).build()
    }

    /// Returns `true` if custom CA is configured.
    pub fn has_custom_ca(&self) -> bool {
        self.ca_cert_file.is_some() || self.ca_cert_pem.is_some()
    }

    /// Applies this configuration to a `reqwest` client builder.
    pub(crate) fn apply(
        &self,
        mut builder: reqwest::ClientBuilder,
    ) -> Result<reqwest::ClientBuilder, Error> {
        if self.skip_verification {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref ca_cert_file) = self.ca_cert_file {
            let cert_pem = std::fs::read(ca_cert_file).map_err(|e| {
                Error::configuration(format!(
                    "Failed to read certificate {:?}: {}",
                    ca_cert_file, e
                ))
                .with_source(e)
            })?;
            let cert = reqwest::Certificate::from_pem(&cert_pem).map_err(|e| {
                Error::configuration(format!("Invalid certificate {:?}: {}", ca_cert_file, e))
                    .with_source(e)
            })?;
            builder = builder.add_root_certificate(cert);
        }

        if let Some(ref ca_cert_pem) = self.ca_cert_pem {
            let cert = reqwest::Certificate::from_pem(ca_cert_pem.as_bytes()).map_err(|e| {
                Error::configuration(format!("Invalid CA certificate PEM: {}", e)).with_source(e)
            })?;
            builder = builder.add_root_certificate(cert);
        }

        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_default() {
        let config = TlsConfig::default();
        assert!(config.ca_cert_file.is_none());
        assert!(!config.skip_verification);
        assert!(!config.has_custom_ca());
    }

    #[test]
    fn test_ca_cert_file() {
        let config = TlsConfig::builder().ca_cert_file("/path/to/ca.crt").build();
        assert!(config.has_custom_ca());
        assert_eq!(config.ca_cert_file, Some(PathBuf::from("/path/to/ca.crt")));
    }

    #[test]
    fn test_insecure() {
        let config = TlsConfig::insecure();
        assert!(config.skip_verification);
    }

    #[test]
    fn test_apply_missing_ca_file() {
        let config = TlsConfig::builder()
            .ca_cert_file("/definitely/not/here/ca.crt")
            .build();
        let err = config.apply(reqwest::Client::builder()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.message().contains("ca.crt"));
    }

    #[test]
    fn test_apply_default_is_noop() {
        assert!(TlsConfig::default().apply(reqwest::Client::builder()).is_ok());
    }
}
