//! Error kind enumeration for categorizing SDK errors.

/// Categorization of SDK errors.
///
/// Only failures that prevent a request/response cycle from completing are
/// errors. A server that answers with a non-200 status is *not* an error: the
/// status and body come back in an [`ApiResponse`](crate::ApiResponse).
///
/// ## Origin of each kind
///
/// | ErrorKind         | Raised by                                       |
/// |-------------------|-------------------------------------------------|
/// | `Connection`      | DNS, refused connection, TLS handshake          |
/// | `Timeout`         | Request exceeded the configured timeout         |
/// | `Transport`       | Any other HTTP-level failure (body read, etc.)  |
/// | `NotFound`        | Photo file does not exist                       |
/// | `Forbidden`       | Photo file cannot be read (permissions)         |
/// | `InvalidArgument` | Bad input (non-file photo path, header value)   |
/// | `Configuration`   | Invalid base URL, TLS material, environment     |
/// | `InvalidResponse` | Typed view requested on a body of another shape |
/// | `Protocol`        | JSON encoding/decoding failure                  |
/// | `Internal`        | Unexpected local I/O failure                    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Connection error (DNS, TLS handshake, network unreachable).
    #[error("connection error")]
    Connection,

    /// Request timed out on the client side.
    #[error("timeout")]
    Timeout,

    /// Transport layer error.
    ///
    /// Generic HTTP error that doesn't fit a more specific category.
    #[error("transport error")]
    Transport,

    /// A local resource (typically the photo file) was not found.
    #[error("not found")]
    NotFound,

    /// A local resource could not be accessed.
    #[error("forbidden")]
    Forbidden,

    /// Invalid argument supplied by the caller.
    #[error("invalid argument")]
    InvalidArgument,

    /// Configuration error (invalid URL, TLS material, environment value).
    #[error("configuration error")]
    Configuration,

    /// The response body does not have the shape the caller asked for.
    #[error("invalid response")]
    InvalidResponse,

    /// Protocol error (JSON encoding or decoding).
    #[error("protocol error")]
    Protocol,

    /// Unexpected local failure.
    #[error("internal error")]
    Internal,
}

impl ErrorKind {
    /// Returns `true` if this kind describes a failure to reach the server
    /// or to complete the HTTP exchange.
    ///
    /// ```rust
    /// use petfriends::ErrorKind;
    ///
    /// assert!(ErrorKind::Timeout.is_transport());
    /// assert!(!ErrorKind::NotFound.is_transport());
    /// ```
    #[inline]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ErrorKind::Connection | ErrorKind::Timeout | ErrorKind::Transport
        )
    }
}
