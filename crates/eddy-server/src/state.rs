//! Application state.

use std::sync::Arc;

use eddy_core::FetchService;

use crate::metrics::FetchMetrics;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The fetch-through cache.
    fetch_service: Arc<FetchService>,
    /// Hit/miss recorder.
    metrics: FetchMetrics,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(fetch_service: Arc<FetchService>) -> Self {
        Self {
            fetch_service,
            metrics: FetchMetrics::new(),
        }
    }

    /// Creates an AppState taking ownership of a FetchService.
    pub fn from_service(service: FetchService) -> Self {
        Self::new(Arc::new(service))
    }

    /// Returns a reference to the fetch service.
    pub fn fetch_service(&self) -> &FetchService {
        self.fetch_service.as_ref()
    }

    /// Returns the metrics recorder.
    pub fn metrics(&self) -> &FetchMetrics {
        &self.metrics
    }
}
