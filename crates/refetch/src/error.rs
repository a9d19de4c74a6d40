//! Error types for refetch.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("request timeout")]
    Timeout,

    #[error("connection refused")]
    ConnectionRefused,

    #[error("network error: {0}")]
    Network(String),

    #[error("response body error: {0}")]
    Body(String),
}

impl FetchError {
    /// Returns `true` for the "resource not found" failure class.
    ///
    /// This is the only class the retry loop treats specially: it is
    /// retried up to the configured ceiling and then propagated, while
    /// every other class is retried indefinitely.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}
