//! Origin client trait definition.

use async_trait::async_trait;
use bytes::Bytes;

use super::OriginError;

/// A fully read origin response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginResponse {
    /// HTTP status code.
    pub status: u16,
    /// Value of the `Content-Type` header, if the origin sent one.
    pub content_type: Option<String>,
    /// The complete body.
    pub body: Bytes,
}

impl OriginResponse {
    /// Creates a `200 OK` response.
    pub fn ok(body: impl Into<Bytes>, content_type: Option<&str>) -> Self {
        Self {
            status: 200,
            content_type: content_type.map(String::from),
            body: body.into(),
        }
    }

    /// Creates a response with the given status and an empty body.
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            content_type: None,
            body: Bytes::new(),
        }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fetches bytes and headers from a URL.
///
/// Implementations must be cancel-safe: dropping the returned future aborts
/// the outbound request.
///
/// # Implementors
///
/// - `HttpOriginClient` - reqwest over rustls
/// - test doubles that count calls and script responses
#[async_trait]
pub trait OriginClient: Send + Sync {
    /// Performs a GET against `url` and reads the whole body.
    ///
    /// # Errors
    ///
    /// - `OriginError::Transport` if no response was received
    /// - `OriginError::Timeout` if the configured timeout elapsed
    /// - `OriginError::Body` if the body could not be read
    async fn get(&self, url: &str) -> Result<OriginResponse, OriginError>;

    /// Returns the name of this client, used for logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticClient;

    #[async_trait]
    impl OriginClient for StaticClient {
        async fn get(&self, url: &str) -> Result<OriginResponse, OriginError> {
            Ok(OriginResponse::ok(url.to_string(), Some("text/plain")))
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    #[tokio::test]
    async fn test_static_client() {
        let client = StaticClient;
        let response = client.get("https://a.test/x").await.unwrap();

        assert!(response.is_success());
        assert_eq!(response.body.as_ref(), b"https://a.test/x");
        assert_eq!(response.content_type.as_deref(), Some("text/plain"));
        assert_eq!(client.name(), "static");
    }

    #[test]
    fn test_is_success() {
        assert!(OriginResponse::with_status(200).is_success());
        assert!(OriginResponse::with_status(204).is_success());
        assert!(!OriginResponse::with_status(199).is_success());
        assert!(!OriginResponse::with_status(304).is_success());
        assert!(!OriginResponse::with_status(404).is_success());
        assert!(!OriginResponse::with_status(500).is_success());
    }
}
