//! Outbound access to origin servers.
//!
//! The service only needs "GET a URL, hand back status, content type and
//! body". [`OriginClient`] is that seam; [`HttpOriginClient`] is the
//! reqwest-backed implementation used in production.

mod config;
mod error;
mod http;
mod traits;

pub use config::{OriginClientConfig, OriginClientConfigBuilder};
pub use error::OriginError;
pub use http::HttpOriginClient;
pub use traits::{OriginClient, OriginResponse};
