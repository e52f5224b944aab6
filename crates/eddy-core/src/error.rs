//! Error types for the fetch-through cache.
//!
//! Every failure of [`FetchService::resolve`](crate::FetchService::resolve)
//! is local and recoverable: the caller decides whether to log, retry or
//! map it onto a transport status.

use thiserror::Error;

/// Result alias used throughout `eddy-core`.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors returned when resolving an (origin, resource) pair.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The origin or resource identifier was empty.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The origin is not part of the configured allow-list.
    #[error("origin not allowed: {0}")]
    OriginNotAllowed(String),

    /// The origin could not be fetched: transport error, non-success
    /// status or a failure while reading the body.
    #[error("failed to fetch {url}: {reason}")]
    FetchFailed {
        /// The target that was requested.
        url: String,
        /// What went wrong.
        reason: String,
    },
}

impl FetchError {
    /// Creates an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Creates an origin-not-allowed error.
    pub fn origin_not_allowed(origin: impl Into<String>) -> Self {
        Self::OriginNotAllowed(origin.into())
    }

    /// Creates a fetch failure for the given target.
    pub fn fetch_failed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FetchFailed {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Stable, machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::OriginNotAllowed(_) => "origin_not_allowed",
            Self::FetchFailed { .. } => "fetch_failed",
        }
    }

    /// Returns true if the failure came from the upstream origin.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::FetchFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::invalid_input("origin is empty");
        assert_eq!(err.to_string(), "invalid input: origin is empty");

        let err = FetchError::origin_not_allowed("https://evil.test");
        assert_eq!(err.to_string(), "origin not allowed: https://evil.test");

        let err = FetchError::fetch_failed("https://a.test/x", "status 503");
        assert_eq!(err.to_string(), "failed to fetch https://a.test/x: status 503");
    }

    #[test]
    fn test_kind() {
        assert_eq!(FetchError::invalid_input("x").kind(), "invalid_input");
        assert_eq!(FetchError::origin_not_allowed("x").kind(), "origin_not_allowed");
        assert_eq!(FetchError::fetch_failed("u", "r").kind(), "fetch_failed");
    }

    #[test]
    fn test_is_upstream() {
        assert!(FetchError::fetch_failed("u", "r").is_upstream());
        assert!(!FetchError::origin_not_allowed("x").is_upstream());
        assert!(!FetchError::invalid_input("x").is_upstream());
    }
}
