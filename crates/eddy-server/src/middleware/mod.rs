//! Middleware stack para el servidor HTTP.
//!
//! Se aplica a todas las rutas, en este orden:
//! - `RequestIdLayer`: genera o propaga `x-request-id`
//! - `LoggingLayer`: span `http_request` y log de cada respuesta

mod logging;
mod request_id;

pub use logging::{LoggingLayer, LoggingMiddleware};
pub use request_id::{MAX_REQUEST_ID_LEN, REQUEST_ID_HEADER, RequestIdLayer, RequestIdMiddleware};
