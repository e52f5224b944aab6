//! Metrics module for the Eddy server.

pub mod fetch;
pub mod http;
pub mod setup;

pub use fetch::FetchMetrics;
pub use setup::{init_metrics, register_metrics};
