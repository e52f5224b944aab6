//! Modulo de respuestas para objetos cacheados.
//!
//! Serves a [`CachedObject`](eddy_core::CachedObject) the way a static file
//! server would:
//! - validators (`ETag`, `Last-Modified`)
//! - conditional requests (`If-None-Match`, `If-Modified-Since`,
//!   `If-Match`, `If-Unmodified-Since`)
//! - single byte ranges (`Range`, `If-Range`)

pub mod http_date;
pub mod object;
pub mod range;

pub use object::{ObjectResponse, etag_for};
