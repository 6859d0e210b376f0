//! Internal client implementation: URL building, headers, and the
//! request/response pipeline shared by every operation.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::Instrument;
use url::Url;

use crate::auth::{ApiKey, Credentials};
use crate::error::map_reqwest_error;
use crate::response::ApiResponse;
use crate::Error;

/// Header carrying the API key.
pub(crate) const AUTH_KEY_HEADER: &str = "auth_key";

const EMAIL_HEADER: &str = "email";

const PASSWORD_HEADER: &str = "password";

pub(crate) struct ClientInner {
    /// API base URL, always ending in `/`.
    pub base_url: Url,

    /// Request timeout.
    pub timeout: Duration,

    /// HTTP client.
    pub http_client: reqwest::Client,
}

impl ClientInner {
    /// Resolves an endpoint path against the base URL.
    pub(crate) fn build_url(&self, path: &str) -> Result<Url, Error> {
        self.base_url.join(path).map_err(|e| {
            Error::configuration(format!("Invalid URL path {:?}: {}", path, e)).with_source(e)
        })
    }

    /// Builds the path for a single pet, percent-encoding the id.
    pub(crate) fn pet_url(&self, prefix: &str, pet_id: &str) -> Result<Url, Error> {
        if pet_id.is_empty() {
            return Err(Error::invalid_argument("pet id cannot be empty"));
        }
        self.build_url(&format!("{}{}", prefix, urlencoding::encode(pet_id)))
    }

    /// Headers for `GET api/key`.
    pub(crate) fn credential_headers(credentials: &Credentials) -> Result<HeaderMap, Error> {
        let mut headers = base_headers();
        headers.insert(EMAIL_HEADER, header_value("email", credentials.email(), false)?);
        headers.insert(
            PASSWORD_HEADER,
            header_value("password", credentials.password(), true)?,
        );
        Ok(headers)
    }

    /// Headers for key-authenticated calls.
    pub(crate) fn key_headers(key: &ApiKey) -> Result<HeaderMap, Error> {
        let mut headers = base_headers();
        headers.insert(AUTH_KEY_HEADER, header_value("API key", key.as_str(), true)?);
        Ok(headers)
    }

    /// Sends a request and reads the full response.
    ///
    /// Any status is returned as `Ok`; only transport failures are `Err`.
    pub(crate) async fn execute(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse, Error> {
        let request = request
            .timeout(self.timeout)
            .build()
            .map_err(map_reqwest_error)?;

        let span = tracing::debug_span!(
            "petfriends.request",
            operation,
            method = %request.method(),
            path = request.url().path(),
        );

        async move {
            tracing::debug!("sending request");

            let response = match self.http_client.execute(request).await {
                Ok(response) => response,
                Err(e) => {
                    let err = map_reqwest_error(e);
                    tracing::warn!(error = %err, "request failed");
                    return Err(err);
                }
            };

            let response = ApiResponse::read(response).await.inspect_err(|err| {
                tracing::warn!(error = %err, "failed to read response body");
            })?;

            tracing::debug!(
                status = response.status_code(),
                body = response.body().kind_name(),
                "received response"
            );
            Ok(response)
        }
        .instrument(span)
        .await
    }
}

fn base_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

fn header_value(what: &str, value: &str, sensitive: bool) -> Result<HeaderValue, Error> {
    let mut header = HeaderValue::from_str(value).map_err(|e| {
        Error::invalid_argument(format!("{} contains characters not allowed in a header", what))
            .with_source(e)
    })?;
    header.set_sensitive(sensitive);
    Ok(header)
}
