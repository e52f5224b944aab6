//! In-memory origin for router tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use eddy_core::{OriginClient, OriginError, OriginResponse};

/// The only origin allowed by [`super::app`].
pub const ORIGIN: &str = "https://example.test";

/// Serves fixed pages keyed by full url; anything else is a 404.
#[derive(Default)]
pub struct StubOrigin {
    pages: Mutex<HashMap<String, OriginResponse>>,
    calls: AtomicUsize,
}

impl StubOrigin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `body` under `ORIGIN/resource`.
    pub fn page(self, resource: &str, content_type: Option<&str>, body: &str) -> Self {
        self.set(resource, OriginResponse::ok(Bytes::from(body.to_string()), content_type));
        self
    }

    /// Replaces the response for `ORIGIN/resource`.
    pub fn set(&self, resource: &str, response: OriginResponse) {
        self.pages
            .lock()
            .unwrap()
            .insert(format!("{}/{}", ORIGIN, resource), response);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OriginClient for StubOrigin {
    async fn get(&self, url: &str) -> Result<OriginResponse, OriginError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if url.ends_with("/unreachable") {
            return Err(OriginError::transport("connection refused"));
        }
        Ok(self
            .pages
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| OriginResponse::with_status(404)))
    }

    fn name(&self) -> &str {
        "stub"
    }
}
