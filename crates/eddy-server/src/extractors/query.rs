use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use url::form_urlencoded;

/// Query parameters del endpoint de fetch.
///
/// Solo se lee `url`: si aparece varias veces gana la primera, y si falta
/// equivale a vacio. Nunca rechaza la request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchQuery {
    /// Origin y path del recurso, por ejemplo `https://example.test/index.html`.
    pub url: String,
}

impl FetchQuery {
    /// Extracts `url` from a raw query string.
    pub fn from_query(query: Option<&str>) -> Self {
        let url = query
            .and_then(|query| {
                form_urlencoded::parse(query.as_bytes())
                    .find(|(key, _)| key == "url")
                    .map(|(_, value)| value.into_owned())
            })
            .unwrap_or_default();

        Self { url }
    }
}

impl<S> FromRequestParts<S> for FetchQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_query(parts.uri.query()))
    }
}
