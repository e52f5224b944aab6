use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use eddy_core::FetchError;
use serde::Serialize;

/// Errores que el handler devuelve al cliente.
///
/// Every core failure maps to `404 Not Found`; the JSON body carries the
/// error kind so callers can still tell the cases apart.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// El parametro `url` no tiene la forma `<host>/<resource>`
    #[error("invalid target: {0:?}")]
    InvalidTarget(String),

    /// Error del core (validacion, allow-list, origin)
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl AppError {
    /// Machine-readable kind, also used as a metrics label.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidTarget(_) => "invalid_target",
            AppError::Fetch(err) => err.kind(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidTarget(_) | AppError::Fetch(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_not_found() {
        let errors = [
            AppError::from(FetchError::invalid_input("origin is empty")),
            AppError::from(FetchError::origin_not_allowed("https://x.test")),
            AppError::from(FetchError::fetch_failed("https://x.test/a", "status 500")),
            AppError::InvalidTarget("nohost".to_string()),
        ];

        for err in errors {
            assert_eq!(err.status(), StatusCode::NOT_FOUND, "{:?}", err);
        }
    }

    #[test]
    fn test_kind_passthrough() {
        let err = AppError::from(FetchError::origin_not_allowed("https://x.test"));
        assert_eq!(err.kind(), "origin_not_allowed");
        assert_eq!(err.to_string(), "origin not allowed: https://x.test");

        assert_eq!(AppError::InvalidTarget(String::new()).kind(), "invalid_target");
    }
}
