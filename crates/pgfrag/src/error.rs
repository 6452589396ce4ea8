//! Error types for pgfrag

use thiserror::Error;

/// Result type alias for fragment compilation.
pub type FragResult<T> = Result<T, FragError>;

/// Error type for fragment compilation.
///
/// Every failure here is a deterministic function of the input, so there is
/// no retry or recovery path; errors propagate to the caller uncaught.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FragError {
    /// Client-input validation failure
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl FragError {
    /// Create a bad-request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}
