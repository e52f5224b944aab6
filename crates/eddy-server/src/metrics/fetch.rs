//! Fetch-through cache metrics recording.

use eddy_core::ResolveOutcome;
use metrics::{counter, gauge, histogram};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Registra las metricas del cache.
/// Llamar una vez al inicio para registrar las metricas.
pub fn register_fetch_metrics() {
    metrics::describe_counter!("eddy_fetch_hits_total", "Resolves served from a fresh cached copy");
    metrics::describe_counter!("eddy_fetch_misses_total", "Resolves that fetched an uncached resource");
    metrics::describe_counter!(
        "eddy_fetch_refreshes_total",
        "Resolves that replaced a stale cached copy"
    );
    metrics::describe_counter!("eddy_fetch_errors_total", "Failed resolves by error kind");
    metrics::describe_gauge!("eddy_cache_entries", "Current number of entries in cache");
    metrics::describe_histogram!(
        "eddy_resolve_seconds",
        "Time spent resolving a resource, labelled by outcome"
    );
}

/// Recorder de metricas del fetch service.
/// Usa atomic counters internos para calcular el hit rate.
#[derive(Debug, Clone)]
pub struct FetchMetrics {
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl FetchMetrics {
    pub fn new() -> Self {
        Self {
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Registra el resultado de un resolve exitoso
    pub fn record_outcome(&self, outcome: ResolveOutcome, duration: Duration) {
        match outcome {
            ResolveOutcome::Hit => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                counter!("eddy_fetch_hits_total").increment(1);
            },
            ResolveOutcome::Miss => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                counter!("eddy_fetch_misses_total").increment(1);
            },
            ResolveOutcome::Refreshed => {
                // A refresh also went to the origin.
                self.misses.fetch_add(1, Ordering::Relaxed);
                counter!("eddy_fetch_refreshes_total").increment(1);
            },
        }

        histogram!("eddy_resolve_seconds", "outcome" => outcome.as_str())
            .record(duration.as_secs_f64());
    }

    /// Registra un resolve fallido
    pub fn record_error(&self, kind: &'static str) {
        counter!("eddy_fetch_errors_total", "kind" => kind).increment(1);
    }

    /// Actualiza el gauge de entries
    pub fn update_entry_count(&self, count: usize) {
        gauge!("eddy_cache_entries").set(count as f64);
    }

    /// Calcula hit rate (para logging/debugging)
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(Ordering::Relaxed) as f64;
        let misses = self.misses.load(Ordering::Relaxed) as f64;
        let total = hits + misses;
        if total == 0.0 { 0.0 } else { hits / total }
    }

    /// Retorna el numero de hits
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Retorna el numero de resolves que fueron al origin
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

impl Default for FetchMetrics {
    fn default() -> Self {
        Self::new()
    }
}
