//! Eddy Server - HTTP front end for the Eddy fetch-through cache.
//!
//! Exposes [`eddy_core::FetchService`] over axum:
//!
//! - `GET /?url=<origin>/<resource>` serves the resource from cache or origin
//! - `GET /health` liveness check
//! - `GET /metrics` Prometheus exposition

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod response;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::{Settings, SettingsError};
pub use error::{AppError, ErrorResponse};
pub use handlers::health::HEALTH_BODY;
pub use server::{create_router, create_router_with_state, run_server_with_state};
pub use state::AppState;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
