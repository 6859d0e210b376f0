//! Expected server outcomes for table-driven cases.

use std::fmt;

use crate::{ApiResponse, Error};

/// What a case expects the server to do with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// The server answers 200.
    Accepted,

    /// The server answers anything but 200.
    Rejected,

    /// The server answers 200 to input it should reject.
    ///
    /// Cases marked this way document a server defect. They pass while the
    /// defect is present and log a warning; once the server is fixed they
    /// fail and should become [`Rejected`](Self::Rejected).
    KnownDefect,
}

impl Expectation {
    /// Returns `true` if a response with this status meets the expectation.
    pub fn matches(self, status: u16) -> bool {
        match self {
            Self::Accepted | Self::KnownDefect => status == 200,
            Self::Rejected => status != 200,
        }
    }

    /// Checks a response against the expectation.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidResponse`](crate::ErrorKind::InvalidResponse)
    /// error describing the mismatch.
    pub fn check(self, response: &ApiResponse) -> Result<(), Error> {
        let status = response.status_code();
        if !self.matches(status) {
            return Err(Error::invalid_response(format!(
                "expected {}, server answered {} with {}",
                self,
                status,
                response.body().kind_name()
            )));
        }
        if self == Self::KnownDefect {
            tracing::warn!(status, "server accepted input it should reject");
        }
        Ok(())
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Accepted => "acceptance",
            Self::Rejected => "rejection",
            Self::KnownDefect => "acceptance (known defect)",
        };
        f.write_str(text)
    }
}
