//! Client builder.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use super::inner::ClientInner;
use crate::config::{EnvConfig, TlsConfig};
use crate::{Client, Error, user_agent};

/// Base URL of the public PetFriends deployment.
pub const DEFAULT_BASE_URL: &str = "https://petfriends.skillfactory.ru/";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builder for creating [`Client`] instances.
///
/// Every setting has a default, so `ClientBuilder::new().build()` talks to
/// the public deployment with a 30 second timeout.
///
/// ## Optional Configuration
///
/// - `base_url()`: API root (default [`DEFAULT_BASE_URL`])
/// - `timeout()`: Per-request timeout
/// - `connect_timeout()`: Connection establishment timeout
/// - `tls_config()`: Custom CA material
/// - `insecure()`: Allow plain HTTP and skip certificate checks
/// - `user_agent()`: Replace the default User-Agent
///
/// ## Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use petfriends::Client;
///
/// let client = Client::builder()
///     .base_url("https://petfriends.example.org")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
    connect_timeout: Duration,
    tls_config: TlsConfig,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Creates a new client builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            tls_config: TlsConfig::default(),
            user_agent: None,
        }
    }

    /// Creates a builder seeded from `PETFRIENDS_*` environment variables.
    ///
    /// See [`EnvConfig`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a variable is set to a malformed value.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new().env_config(EnvConfig::from_env()?))
    }

    /// Applies environment-derived overrides.
    #[must_use]
    pub fn env_config(mut self, config: EnvConfig) -> Self {
        if let Some(url) = config.base_url {
            self.base_url = url;
        }
        if let Some(timeout) = config.timeout {
            self.timeout = timeout;
        }
        if config.insecure {
            self.tls_config.skip_verification = true;
        }
        self
    }

    /// Sets the API base URL.
    ///
    /// A trailing slash is added when missing, so endpoint paths always nest
    /// under the given URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the TLS configuration.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use petfriends::TlsConfig;
    ///
    /// let builder = builder.tls_config(
    ///     TlsConfig::builder().ca_cert_file("/path/to/ca.crt").build()
    /// );
    /// ```
    #[must_use]
    pub fn tls_config(mut self, config: TlsConfig) -> Self {
        self.tls_config = config;
        self
    }

    /// Disables TLS certificate verification and allows HTTP connections.
    ///
    /// **WARNING**: This is insecure and should only be used for local
    /// or sandboxed deployments.
    #[must_use]
    pub fn insecure(mut self) -> Self {
        self.tls_config.skip_verification = true;
        self
    }

    /// Replaces the default User-Agent header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validates and normalizes the base URL.
    fn parse_base_url(&self) -> Result<Url, Error> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }

        let url = Url::parse(&raw)
            .map_err(|e| Error::configuration(format!("invalid base URL: {}", e)).with_source(e))?;

        match url.scheme() {
            "https" => {}
            "http" if self.tls_config.skip_verification => {}
            "http" => {
                return Err(Error::configuration(
                    "HTTPS is required. Use .insecure() for development with HTTP.",
                ));
            }
            other => {
                return Err(Error::configuration(format!(
                    "unsupported URL scheme {:?}",
                    other
                )));
            }
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(Error::configuration(
                "base URL cannot carry a query string or fragment",
            ));
        }

        Ok(url)
    }

    /// Builds the client.
    ///
    /// No network traffic happens here; the first request opens the first
    /// connection.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if:
    /// - The URL is invalid, or plain HTTP without `insecure()`
    /// - The TLS material cannot be loaded
    /// - The HTTP client cannot be created
    pub fn build(self) -> Result<Client, Error> {
        let base_url = self.parse_base_url()?;

        let user_agent = self
            .user_agent
            .clone()
            .unwrap_or_else(|| user_agent::user_agent().to_string());

        let builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(user_agent);
        let builder = self.tls_config.apply(builder)?;

        let http_client = builder.build().map_err(|e| {
            Error::configuration(format!("Failed to create HTTP client: {}", e)).with_source(e)
        })?;

        tracing::debug!(
            base_url = %base_url,
            timeout = ?self.timeout,
            insecure = self.tls_config.skip_verification,
            "client created"
        );

        Ok(Client::from_inner(Arc::new(ClientInner {
            base_url,
            timeout: self.timeout,
            http_client,
        })))
    }

    /// Builds a synchronous client.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build), plus an internal error if the
    /// runtime backing the blocking calls cannot start.
    #[cfg(feature = "blocking")]
    #[cfg_attr(docsrs, doc(cfg(feature = "blocking")))]
    pub fn build_blocking(self) -> Result<crate::blocking::Client, Error> {
        crate::blocking::Client::from_async(self.build()?)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
