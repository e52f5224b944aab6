use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

/// Cuerpo fijo del health check.
pub const HEALTH_BODY: &str = "OK";

/// GET /health
/// Liveness only; never touches the fetch service.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        HEALTH_BODY,
    )
}
