//! Fetch-through cache service.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, instrument, warn};

use crate::allow_list::AllowList;
use crate::clock::{Clock, SystemClock};
use crate::error::{FetchError, Result};
use crate::object::CachedObject;
use crate::origin::OriginClient;
use crate::store::CacheStore;

/// Freshness window applied to every fetched object.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Longest accepted freshness window (100 years).
pub const MAX_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Configuration for [`FetchService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    allowed_origins: AllowList,
    ttl: Duration,
}

impl FetchConfig {
    /// Creates a new builder for FetchConfig.
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }

    /// Returns the allow-list.
    pub fn allowed_origins(&self) -> &AllowList {
        &self.allowed_origins
    }

    /// Returns the freshness window.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

/// Builder for FetchConfig.
#[derive(Debug, Default)]
pub struct FetchConfigBuilder {
    allowed_origins: Vec<String>,
    ttl: Option<Duration>,
}

impl FetchConfigBuilder {
    /// Adds an allowed origin.
    pub fn allow_origin(mut self, origin: impl Into<String>) -> Self {
        self.allowed_origins.push(origin.into());
        self
    }

    /// Sets the allowed origins, replacing any added before.
    pub fn allowed_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the freshness window.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the TTL is zero or longer than [`MAX_TTL`].
    pub fn build(self) -> std::result::Result<FetchConfig, &'static str> {
        let ttl = self.ttl.unwrap_or(DEFAULT_TTL);
        if ttl.is_zero() {
            return Err("ttl must be greater than zero");
        }
        if ttl > MAX_TTL {
            return Err("ttl must not exceed 100 years");
        }

        Ok(FetchConfig {
            allowed_origins: AllowList::new(self.allowed_origins),
            ttl,
        })
    }
}

/// How a successful resolve was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// A fresh cached copy was returned, no network I/O.
    Hit,
    /// Nothing was cached; the origin was fetched.
    Miss,
    /// A stale copy was replaced by a new fetch.
    Refreshed,
}

impl ResolveOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Miss => "miss",
            Self::Refreshed => "refreshed",
        }
    }

    /// Returns true if the origin was contacted.
    pub fn fetched(&self) -> bool {
        !matches!(self, Self::Hit)
    }
}

impl fmt::Display for ResolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves (origin, resource) pairs through the cache.
///
/// Owns the allow-list and the store. Stale entries are always refetched
/// and a failed refetch surfaces as an error; a stale copy is never served.
/// Concurrent misses on the same key may each fetch, the last write wins.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use eddy_core::{FetchConfig, FetchService, HttpOriginClient, OriginClientConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FetchConfig::builder()
///     .allow_origin("https://example.test")
///     .build()?;
/// let client = HttpOriginClient::new(OriginClientConfig::default())?;
/// let service = FetchService::new(config, Arc::new(client));
///
/// let object = service.resolve("https://example.test", "index.html").await?;
/// println!("{} bytes, etag {}", object.len(), object.content_hash());
/// # Ok(())
/// # }
/// ```
pub struct FetchService {
    config: FetchConfig,
    store: CacheStore,
    client: Arc<dyn OriginClient>,
    clock: Arc<dyn Clock>,
}

impl FetchService {
    /// Creates a service reading time from the system clock.
    pub fn new(config: FetchConfig, client: Arc<dyn OriginClient>) -> Self {
        Self::with_clock(config, client, Arc::new(SystemClock))
    }

    /// Creates a service with an explicit clock.
    pub fn with_clock(
        config: FetchConfig,
        client: Arc<dyn OriginClient>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        if config.allowed_origins().is_empty() {
            warn!("Allow-list is empty, every origin will be rejected");
        }

        Self {
            config,
            store: CacheStore::new(),
            client,
            clock,
        }
    }

    /// Returns the cached object for `(origin, resource)`, fetching it from
    /// the origin when absent or stale.
    ///
    /// # Errors
    ///
    /// - `FetchError::InvalidInput` if `origin` or `resource` is empty
    /// - `FetchError::OriginNotAllowed` if `origin` is not allow-listed
    /// - `FetchError::FetchFailed` if the origin fetch failed
    pub async fn resolve(&self, origin: &str, resource: &str) -> Result<Arc<CachedObject>> {
        self.resolve_with_outcome(origin, resource)
            .await
            .map(|(object, _)| object)
    }

    /// Same as [`resolve`](Self::resolve), also reporting whether the
    /// result was a hit, a first fetch or a refresh.
    #[instrument(skip(self), fields(client = self.client.name()))]
    pub async fn resolve_with_outcome(
        &self,
        origin: &str,
        resource: &str,
    ) -> Result<(Arc<CachedObject>, ResolveOutcome)> {
        if origin.is_empty() {
            return Err(FetchError::invalid_input("origin is empty"));
        }
        if resource.is_empty() {
            return Err(FetchError::invalid_input("resource is empty"));
        }
        if !self.config.allowed_origins().contains(origin) {
            warn!(host = %origin, "host not allowed");
            return Err(FetchError::origin_not_allowed(origin));
        }

        // The read guard is released before any await below.
        let cached = self.store.get(origin, resource);
        let outcome = match &cached {
            Some(object) if object.is_fresh_at(self.clock.now()) => {
                debug!(host = %origin, object = %resource, "cache hit");
                return Ok((Arc::clone(object), ResolveOutcome::Hit));
            },
            Some(_) => ResolveOutcome::Refreshed,
            None => ResolveOutcome::Miss,
        };

        let object = Arc::new(self.fetch(origin, resource).await?);
        self.store.put(origin, resource, Arc::clone(&object));

        debug!(
            host = %origin,
            object = %resource,
            outcome = %outcome,
            bytes = object.len(),
            "cache populated"
        );

        Ok((object, outcome))
    }

    async fn fetch(&self, origin: &str, resource: &str) -> Result<CachedObject> {
        let url = format!("{}/{}", origin, resource);

        let response = self.client.get(&url).await.map_err(|e| {
            error!(url = %url, error = %e, "failed to get object");
            FetchError::fetch_failed(&url, e.to_string())
        })?;

        if !response.is_success() {
            error!(url = %url, status = response.status, "origin returned non-success status");
            return Err(FetchError::fetch_failed(
                &url,
                format!("origin returned status {}", response.status),
            ));
        }

        Ok(CachedObject::new(
            response.body,
            response.content_type.unwrap_or_default(),
            self.clock.now(),
            self.config.ttl(),
        ))
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Returns the allow-list.
    pub fn allow_list(&self) -> &AllowList {
        self.config.allowed_origins()
    }

    /// Returns the freshness window.
    pub fn ttl(&self) -> Duration {
        self.config.ttl()
    }
}

impl fmt::Debug for FetchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchService")
            .field("allowed_origins", &self.config.allowed_origins().len())
            .field("ttl", &self.config.ttl())
            .field("entries", &self.store.len())
            .field("client", &self.client.name())
            .finish()
    }
}
