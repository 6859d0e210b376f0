//! The uniform `(status, body)` envelope returned by every operation.
//!
//! The server's answer is always returned as data. A 403 for a bad key, a
//! 400 for a malformed form, an HTML error page with status 500: all of them
//! arrive as `Ok(ApiResponse)`. Callers decide what a status means.
//!
//! ```rust,ignore
//! let (status, body) = client.list_pets(&key, PetFilter::All).await?.into_parts();
//! if status == 200 {
//!     println!("{}", body);
//! }
//! ```

use std::fmt;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::ApiKey;
use crate::types::{Pet, PetList};
use crate::Error;

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// The body parsed as JSON.
    Json(Value),

    /// The body did not parse as JSON. Invalid UTF-8 is replaced lossily.
    Text(String),

    /// The body was empty.
    Empty,
}

impl ResponseBody {
    /// Decodes raw body bytes.
    ///
    /// JSON is tried first; anything else is kept as text.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return ResponseBody::Empty;
        }
        match serde_json::from_slice(bytes) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    /// Returns the JSON value, if the body was JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the raw text, if the body was not JSON.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns `true` for an empty body.
    pub fn is_empty(&self) -> bool {
        matches!(self, ResponseBody::Empty)
    }

    /// Short label used in logs.
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            ResponseBody::Json(_) => "json",
            ResponseBody::Text(_) => "text",
            ResponseBody::Empty => "empty",
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseBody::Json(value) => write!(f, "{}", value),
            ResponseBody::Text(text) => f.write_str(text),
            ResponseBody::Empty => Ok(()),
        }
    }
}

/// Status code and decoded body of one API call.
///
/// Only status 200 counts as success for PetFriends; [`is_ok`](Self::is_ok)
/// checks exactly that. Typed views ([`api_key`](Self::api_key),
/// [`pets`](Self::pets), [`pet`](Self::pet), [`parse`](Self::parse)) look at
/// the body alone and fail with
/// [`InvalidResponse`](crate::ErrorKind::InvalidResponse) rather than panic
/// when it has another shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: StatusCode,
    body: ResponseBody,
}

impl ApiResponse {
    /// Creates a response from its parts.
    pub fn new(status: StatusCode, body: ResponseBody) -> Self {
        Self { status, body }
    }

    /// Returns the HTTP status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the HTTP status as an integer.
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Returns `true` if the status is exactly 200.
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Returns the decoded body.
    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// Splits the response into `(status, body)`.
    pub fn into_parts(self) -> (u16, ResponseBody) {
        (self.status.as_u16(), self.body)
    }

    /// Returns a top-level field of a JSON object body.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.as_json()?.as_object()?.get(name)
    }

    /// Returns `true` if the body is a JSON object with the given field.
    pub fn contains_key(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Deserializes a JSON body into `T`.
    pub fn parse<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let value = self.body.as_json().ok_or_else(|| {
            Error::invalid_response(format!(
                "expected a JSON body, got {} (status {})",
                self.body.kind_name(),
                self.status
            ))
        })?;

        T::deserialize(value).map_err(|e| {
            Error::invalid_response(format!("unexpected response shape: {}", e)).with_source(e)
        })
    }

    /// Extracts the API key from an authentication response.
    pub fn api_key(&self) -> Result<ApiKey, Error> {
        self.field("key")
            .and_then(Value::as_str)
            .map(ApiKey::new)
            .ok_or_else(|| {
                Error::invalid_response(format!(
                    "response (status {}) has no \"key\" field",
                    self.status
                ))
            })
    }

    /// Parses a pet list response.
    pub fn pets(&self) -> Result<PetList, Error> {
        self.parse()
    }

    /// Parses a single pet response.
    pub fn pet(&self) -> Result<Pet, Error> {
        self.parse()
    }

    /// Reads a `reqwest` response to completion.
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, Error> {
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(crate::error::map_reqwest_error)?;
        Ok(Self::new(status, ResponseBody::from_bytes(&bytes)))
    }
}
