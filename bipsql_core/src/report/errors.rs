use std::fmt::{self, Display};

/// A central error enum for report-execution errors.
#[derive(Debug)]
pub enum ReportError {
    /// The statement was rejected before anything went on the wire.
    Validation(String),
    /// The request failed in transit or the endpoint answered with an
    /// error status.
    Network(String),
}

/// Convert from reqwest::Error.
/// Without this, `?` won't work on the send/read calls in the HTTP transport.
impl From<reqwest::Error> for ReportError {
    fn from(err: reqwest::Error) -> Self {
        ReportError::Network(err.to_string())
    }
}

impl Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Validation(msg) => write!(f, "invalid statement: {}", msg),
            ReportError::Network(msg) => write!(f, "request failed: {}", msg),
        }
    }
}

impl std::error::Error for ReportError {}
