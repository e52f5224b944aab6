//! HTTP handlers.

pub mod fetch;
pub mod health;
pub mod metrics;
