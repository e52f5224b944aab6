//! reqwest-backed origin client.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};

use super::{OriginClient, OriginClientConfig, OriginError, OriginResponse};

/// Origin client using a pooled reqwest client over rustls.
#[derive(Debug, Clone)]
pub struct HttpOriginClient {
    config: OriginClientConfig,
    http_client: reqwest::Client,
}

impl HttpOriginClient {
    /// Creates a new client with the given config.
    pub fn new(config: OriginClientConfig) -> Result<Self, OriginError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| OriginError::Build(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &OriginClientConfig {
        &self.config
    }

    fn map_error(&self, err: reqwest::Error) -> OriginError {
        if err.is_timeout() {
            OriginError::Timeout {
                seconds: self.config.timeout().as_secs(),
            }
        } else {
            OriginError::transport(err.to_string())
        }
    }
}

#[async_trait]
impl OriginClient for HttpOriginClient {
    #[instrument(skip(self))]
    async fn get(&self, url: &str) -> Result<OriginResponse, OriginError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                self.map_error(e)
            } else {
                OriginError::body(e.to_string())
            }
        })?;

        debug!(status, bytes = body.len(), "Origin responded");

        Ok(OriginResponse {
            status,
            content_type,
            body,
        })
    }

    fn name(&self) -> &str {
        "http"
    }
}
