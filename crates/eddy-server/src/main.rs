//! Eddy server binary.

use std::sync::Arc;

use anyhow::Context;
use eddy_core::{FetchService, HttpOriginClient};
use eddy_server::{AppState, config, metrics::init_metrics, run_server_with_state, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let settings = config::load().context("failed to load settings")?;
    let addr = settings.socket_addr()?;

    tracing::info!("Starting Eddy server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        origins = ?settings.fetch.allowed_origins,
        ttl_seconds = settings.fetch.ttl_seconds,
        "fetch settings"
    );

    let client = HttpOriginClient::new(settings.origin_client_config()?)
        .context("failed to build origin client")?;
    let service = FetchService::new(settings.fetch_config()?, Arc::new(client));

    let prometheus = init_metrics().context("failed to install metrics recorder")?;
    let state = AppState::from_service(service);

    run_server_with_state(addr, state, prometheus)
        .await
        .with_context(|| format!("server on {} failed", addr))?;

    Ok(())
}
