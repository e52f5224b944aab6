//! Errors raised by origin clients.

/// Failures while talking to an origin.
///
/// A non-success HTTP status is not an error at this level; it is reported
/// through [`OriginResponse::status`](super::OriginResponse::status).
#[derive(Debug, thiserror::Error)]
pub enum OriginError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(String),

    /// Connection, TLS or protocol failure before a response arrived.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response headers arrived but the body could not be read.
    #[error("failed to read body: {0}")]
    Body(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },
}

impl OriginError {
    /// Creates a new transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Creates a new body read error.
    pub fn body(msg: impl Into<String>) -> Self {
        Self::Body(msg.into())
    }
}
