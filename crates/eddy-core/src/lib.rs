//! # Eddy Core
//!
//! Fetch-through cache for remote origins.
//!
//! Given an origin (`https://example.test`) and a resource within it
//! (`index.html`), [`FetchService::resolve`] returns the resource bytes and
//! metadata, serving from memory while the cached copy is fresh and going
//! to the origin otherwise.
//!
//! ## Features
//!
//! - Allow-list gate evaluated before any network access
//! - Fixed freshness window (24h by default), stale means refetch-or-fail
//! - SHA-256 content digest usable as an ETag
//! - Pluggable origin client and clock for testing
//!
//! ## Example
//!
//! ```ignore
//! use eddy_core::{FetchConfig, FetchService, HttpOriginClient, OriginClientConfig};
//!
//! let config = FetchConfig::builder()
//!     .allow_origin("https://example.test")
//!     .build()?;
//!
//! let client = HttpOriginClient::new(OriginClientConfig::default())?;
//! let service = FetchService::new(config, Arc::new(client));
//!
//! let object = service.resolve("https://example.test", "index.html").await?;
//! ```

pub mod allow_list;
pub mod clock;
pub mod error;
pub mod object;
pub mod origin;
pub mod service;
pub mod store;

// Re-exports
pub use allow_list::AllowList;
pub use clock::{Clock, SystemClock};
pub use error::{FetchError, Result};
pub use object::{CachedObject, content_digest};
pub use origin::{
    HttpOriginClient, OriginClient, OriginClientConfig, OriginError, OriginResponse,
};
pub use service::{DEFAULT_TTL, FetchConfig, FetchService, MAX_TTL, ResolveOutcome};
pub use store::CacheStore;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
