//! Cached resource snapshots.

use std::time::{Duration, SystemTime};

use bytes::Bytes;
use sha2::{Digest, Sha256};

/// Computes the content digest used as the ETag of a body.
///
/// Lowercase hex SHA-256 of the exact bytes.
///
/// # Examples
///
/// ```
/// use eddy_core::content_digest;
///
/// let digest = content_digest(b"hello");
/// assert_eq!(digest.len(), 64);
/// assert_eq!(digest, content_digest(b"hello"));
/// ```
pub fn content_digest(body: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body);
    hex::encode(hasher.finalize())
}

/// One fetched resource snapshot.
///
/// Immutable once built: a refresh produces a new object, it never
/// rewrites an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedObject {
    content_hash: String,
    content_type: String,
    body: Bytes,
    fetched_at: SystemTime,
    expires_at: SystemTime,
}

impl CachedObject {
    /// Builds a snapshot, deriving the digest from `body` and the expiry
    /// from `fetched_at + ttl`.
    pub fn new(
        body: impl Into<Bytes>,
        content_type: impl Into<String>,
        fetched_at: SystemTime,
        ttl: Duration,
    ) -> Self {
        let body = body.into();
        Self {
            content_hash: content_digest(&body),
            content_type: content_type.into(),
            body,
            fetched_at,
            // An unrepresentable expiry never makes the object fresh.
            expires_at: fetched_at.checked_add(ttl).unwrap_or(fetched_at),
        }
    }

    /// Hex digest of the body.
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    /// MIME type reported by the origin, empty when it sent none.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// The resource payload.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// When the fetch completed. Exposed to clients as last-modified.
    pub fn fetched_at(&self) -> SystemTime {
        self.fetched_at
    }

    /// When the snapshot stops being fresh.
    pub fn expires_at(&self) -> SystemTime {
        self.expires_at
    }

    /// Returns true while `now` is strictly before the expiry.
    pub fn is_fresh_at(&self, now: SystemTime) -> bool {
        now < self.expires_at
    }

    /// Body length in bytes.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true if the body is empty.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
