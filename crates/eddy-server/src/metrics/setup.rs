//! Metrics setup and initialization.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::info;

use super::{fetch::register_fetch_metrics, http::register_http_metrics};

/// Buckets de histogramas en segundos: desde hits en memoria (~100us)
/// hasta fetches lentos contra el origin.
const LATENCY_BUCKETS: &[f64] = &[
    0.0001, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
    30.0,
];

/// Builds a recorder without installing it globally.
///
/// Tests use the returned handle to mount `/metrics` without touching the
/// process-wide recorder.
pub fn build_handle() -> Result<PrometheusHandle, BuildError> {
    let recorder = PrometheusBuilder::new()
        .set_buckets(LATENCY_BUCKETS)?
        .build_recorder();
    Ok(recorder.handle())
}

/// Inicializa el sistema de metricas y retorna el handle para el endpoint.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new()
        .set_buckets(LATENCY_BUCKETS)?
        .install_recorder()?;

    register_metrics();
    info!("Metrics system initialized");
    Ok(handle)
}

/// Describe todas las metricas del servidor.
pub fn register_metrics() {
    register_fetch_metrics();
    register_http_metrics();
}
