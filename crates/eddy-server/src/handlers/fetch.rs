//! Fetch-through endpoint handler.

use std::time::Instant;

use axum::{
    extract::State,
    http::{
        HeaderMap, HeaderValue,
        header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN},
    },
    response::Response,
};
use tracing::instrument;

use crate::error::AppError;
use crate::extractors::{FetchQuery, FetchTarget};
use crate::response::ObjectResponse;
use crate::state::AppState;

/// Methods advertised to browsers on every served object.
pub const ALLOWED_METHODS: &str = "GET, OPTIONS";

/// GET /?url=<origin>/<resource>
///
/// Resolves the target through the cache and serves it with validators,
/// conditional handling and byte ranges. Every failure is a 404.
#[instrument(skip_all, fields(url = %query.url))]
pub async fn fetch_object(
    State(state): State<AppState>,
    query: FetchQuery,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let Some(target) = FetchTarget::parse(&query.url) else {
        tracing::error!(url = %query.url, "invalid path");
        state.metrics().record_error("invalid_target");
        return Err(AppError::InvalidTarget(query.url));
    };

    tracing::info!(host = %target.origin(), page = %target.resource(), "get object");

    let service = state.fetch_service();
    let start = Instant::now();
    let resolved = service
        .resolve_with_outcome(target.origin(), target.resource())
        .await;

    let (object, outcome) = match resolved {
        Ok(resolved) => resolved,
        Err(err) => {
            state.metrics().record_error(err.kind());
            return Err(err.into());
        },
    };

    state.metrics().record_outcome(outcome, start.elapsed());
    if outcome.fetched() {
        state.metrics().update_entry_count(service.store().len());
    }

    tracing::debug!(
        outcome = %outcome,
        bytes = object.len(),
        etag = %object.content_hash(),
        "object resolved"
    );

    let mut response = ObjectResponse::new(&object).respond(&headers);
    let response_headers = response.headers_mut();
    response_headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response_headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );

    Ok(response)
}
