//! In-memory cache store.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::object::CachedObject;

type ResourceMap = HashMap<String, Arc<CachedObject>>;

/// Two-level mapping origin -> (resource -> object).
///
/// Thread-safe. Lookups never check freshness, that is the caller's job.
/// Entries are only ever inserted or overwritten; they live until the
/// store is dropped.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, SystemTime};
/// use eddy_core::{CacheStore, CachedObject};
///
/// let store = CacheStore::new();
/// let object = CachedObject::new("hi", "text/plain", SystemTime::now(), Duration::from_secs(60));
/// store.put("https://example.test", "index.html", object);
///
/// assert!(store.get("https://example.test", "index.html").is_some());
/// assert!(store.get("https://example.test", "other.html").is_none());
/// ```
#[derive(Debug, Default)]
pub struct CacheStore {
    origins: RwLock<HashMap<String, ResourceMap>>,
}

impl CacheStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the object cached for `(origin, resource)`.
    pub fn get(&self, origin: &str, resource: &str) -> Option<Arc<CachedObject>> {
        let origins = self.origins.read();
        origins
            .get(origin)
            .and_then(|resources| resources.get(resource))
            .cloned()
    }

    /// Inserts or overwrites the entry for `(origin, resource)`.
    pub fn put(&self, origin: &str, resource: &str, object: impl Into<Arc<CachedObject>>) {
        let mut origins = self.origins.write();
        origins
            .entry(origin.to_string())
            .or_default()
            .insert(resource.to_string(), object.into());
    }

    /// Number of cached entries across all origins.
    pub fn len(&self) -> usize {
        self.origins.read().values().map(HashMap::len).sum()
    }

    /// Returns true if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of origins with at least one entry.
    pub fn origin_count(&self) -> usize {
        self.origins.read().len()
    }
}
