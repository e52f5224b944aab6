//! HTTP origin client configuration.

use std::time::Duration;

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_user_agent() -> String {
    format!("eddy/{}", env!("CARGO_PKG_VERSION"))
}

/// Configuration for [`HttpOriginClient`](super::HttpOriginClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginClientConfig {
    /// Total time allowed for one request, body included.
    timeout: Duration,

    /// Time allowed to establish the connection.
    connect_timeout: Duration,

    /// Value of the `User-Agent` header.
    user_agent: String,
}

impl Default for OriginClientConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl OriginClientConfig {
    /// Creates a new builder for OriginClientConfig.
    pub fn builder() -> OriginClientConfigBuilder {
        OriginClientConfigBuilder::default()
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the connect timeout.
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the user agent.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Builder for OriginClientConfig.
#[derive(Debug, Default)]
pub struct OriginClientConfigBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl OriginClientConfigBuilder {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a timeout is zero.
    pub fn build(self) -> Result<OriginClientConfig, &'static str> {
        let timeout = self.timeout.unwrap_or_else(default_timeout);
        let connect_timeout = self.connect_timeout.unwrap_or_else(default_connect_timeout);

        if timeout.is_zero() {
            return Err("timeout must be greater than zero");
        }
        if connect_timeout.is_zero() {
            return Err("connect_timeout must be greater than zero");
        }

        Ok(OriginClientConfig {
            timeout,
            connect_timeout,
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
        })
    }
}
