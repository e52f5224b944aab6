//! Process settings: optional `eddy.toml`, then `EDDY_*` environment
//! variables.
//!
//! ```text
//! EDDY_SERVER__PORT=9000
//! EDDY_FETCH__ALLOWED_ORIGINS=https://a.test,https://b.test
//! ```

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use config::{Config, Environment, File};
use eddy_core::{DEFAULT_TTL, FetchConfig, MAX_TTL, OriginClientConfig};
use serde::Deserialize;
use thiserror::Error;

/// Base name of the optional settings file in the working directory.
pub const CONFIG_BASENAME: &str = "eddy";

/// Prefix of the environment overrides.
pub const ENV_PREFIX: &str = "EDDY";

/// Origin allowed when nothing else is configured.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://paulgraham.com";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl SettingsError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub fetch: FetchSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    /// Origins the service may fetch from, scheme included.
    pub allowed_origins: Vec<String>,
    pub ttl_seconds: u64,
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            fetch: FetchSettings::default(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            ttl_seconds: DEFAULT_TTL.as_secs(),
            timeout_seconds: 30,
            connect_timeout_seconds: 10,
        }
    }
}

/// Environment source with the `EDDY` prefix and `__` nesting.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("fetch.allowed_origins")
        .try_parsing(true)
}

/// Loads settings from `eddy.toml` (optional) and the process environment.
pub fn load() -> Result<Settings, SettingsError> {
    load_with(environment())
}

/// Loads settings with an explicit environment source.
pub fn load_with(env: Environment) -> Result<Settings, SettingsError> {
    let settings: Settings = Config::builder()
        .add_source(File::with_name(CONFIG_BASENAME).required(false))
        .add_source(env)
        .build()?
        .try_deserialize()?;

    settings.validated()
}

impl Settings {
    fn validated(mut self) -> Result<Self, SettingsError> {
        if self.server.port == 0 {
            return Err(SettingsError::invalid("server.port", "must be greater than 0"));
        }
        if self.fetch.ttl_seconds == 0 {
            return Err(SettingsError::invalid("fetch.ttl_seconds", "must be greater than 0"));
        }
        if self.fetch.ttl_seconds > MAX_TTL.as_secs() {
            return Err(SettingsError::invalid(
                "fetch.ttl_seconds",
                format!("must not exceed {}", MAX_TTL.as_secs()),
            ));
        }
        if self.fetch.timeout_seconds == 0 {
            return Err(SettingsError::invalid(
                "fetch.timeout_seconds",
                "must be greater than 0",
            ));
        }
        if self.fetch.connect_timeout_seconds == 0 {
            return Err(SettingsError::invalid(
                "fetch.connect_timeout_seconds",
                "must be greater than 0",
            ));
        }

        self.fetch.allowed_origins = self
            .fetch
            .allowed_origins
            .iter()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Ok(self)
    }

    /// Address to bind. The host must be an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|err| SettingsError::invalid("server.host", format!("{}", err)))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    pub fn fetch_config(&self) -> Result<FetchConfig, SettingsError> {
        FetchConfig::builder()
            .allowed_origins(self.fetch.allowed_origins.iter().cloned())
            .ttl(Duration::from_secs(self.fetch.ttl_seconds))
            .build()
            .map_err(|reason| SettingsError::invalid("fetch.ttl_seconds", reason))
    }

    pub fn origin_client_config(&self) -> Result<OriginClientConfig, SettingsError> {
        OriginClientConfig::builder()
            .timeout(Duration::from_secs(self.fetch.timeout_seconds))
            .connect_timeout(Duration::from_secs(self.fetch.connect_timeout_seconds))
            .build()
            .map_err(|reason| SettingsError::invalid("fetch.timeout_seconds", reason))
    }
}
