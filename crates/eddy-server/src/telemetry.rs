//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Filter used when `LOG_LEVEL` is unset or malformed.
pub const DEFAULT_LOG_LEVEL: &str = "debug";

/// Builds the filter for a `LOG_LEVEL` value.
///
/// Accepts any `EnvFilter` directive (`info`, `warn,eddy_core=debug`).
/// On a malformed value the default filter is returned together with the
/// parse error, so the caller can report it once logging works.
pub fn build_filter(value: Option<&str>) -> (EnvFilter, Option<String>) {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => (EnvFilter::new(DEFAULT_LOG_LEVEL), None),
        Some(directives) => match EnvFilter::try_new(directives) {
            Ok(filter) => (filter, None),
            Err(err) => (
                EnvFilter::new(DEFAULT_LOG_LEVEL),
                Some(format!("invalid {} {:?}: {}", LOG_LEVEL_ENV, directives, err)),
            ),
        },
    }
}

/// Installs the global fmt subscriber filtered by `LOG_LEVEL`.
pub fn init_tracing() {
    let raw = std::env::var(LOG_LEVEL_ENV).ok();
    let (filter, problem) = build_filter(raw.as_deref());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(problem) = problem {
        tracing::error!("{}, falling back to {}", problem, DEFAULT_LOG_LEVEL);
    }
}
