//! Response builder for cached objects.

use axum::{
    body::Body,
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{
            ACCEPT_RANGES, CONTENT_RANGE, CONTENT_TYPE, ETAG, IF_MATCH, IF_MODIFIED_SINCE,
            IF_NONE_MATCH, IF_RANGE, IF_UNMODIFIED_SINCE, LAST_MODIFIED, RANGE,
        },
    },
    response::{IntoResponse, Response},
};
use eddy_core::CachedObject;

use super::http_date::{format_http_date, parse_http_date, unix_seconds};
use super::range::ByteRange;

/// Strong entity tag for an object: its content digest, quoted.
pub fn etag_for(object: &CachedObject) -> String {
    format!("\"{}\"", object.content_hash())
}

/// Serves one [`CachedObject`] honouring the request's conditional and
/// range headers.
pub struct ObjectResponse<'a> {
    object: &'a CachedObject,
    etag: String,
    last_modified: i64,
}

impl<'a> ObjectResponse<'a> {
    pub fn new(object: &'a CachedObject) -> Self {
        Self {
            object,
            etag: etag_for(object),
            last_modified: unix_seconds(object.fetched_at()),
        }
    }

    /// Builds the response for a GET/HEAD carrying `request_headers`.
    pub fn respond(&self, request_headers: &HeaderMap) -> Response {
        if self.precondition_failed(request_headers) {
            return self.without_body(StatusCode::PRECONDITION_FAILED);
        }
        if self.not_modified(request_headers) {
            return self.without_body(StatusCode::NOT_MODIFIED);
        }

        let len = self.object.len() as u64;
        let range = match header_str(request_headers, &RANGE) {
            Some(value) if self.if_range_allows(request_headers) => ByteRange::parse(value, len),
            _ => ByteRange::Full,
        };

        let mut headers = self.representation_headers();
        match range {
            ByteRange::Full => {
                (StatusCode::OK, headers, Body::from(self.object.body().clone())).into_response()
            },
            ByteRange::Partial { start, end } => {
                insert(&mut headers, CONTENT_RANGE, &format!("bytes {}-{}/{}", start, end, len));
                let slice = self.object.body().slice(start as usize..=end as usize);
                (StatusCode::PARTIAL_CONTENT, headers, Body::from(slice)).into_response()
            },
            ByteRange::Unsatisfiable => {
                insert(&mut headers, CONTENT_RANGE, &format!("bytes */{}", len));
                (StatusCode::RANGE_NOT_SATISFIABLE, headers, Body::empty()).into_response()
            },
        }
    }

    /// `If-Match`, or failing that `If-Unmodified-Since`.
    fn precondition_failed(&self, headers: &HeaderMap) -> bool {
        if let Some(list) = header_list(headers, &IF_MATCH) {
            return !etag_list_matches(&list, &self.etag, false);
        }
        match header_str(headers, &IF_UNMODIFIED_SINCE).and_then(parse_http_date) {
            Some(since) => self.last_modified > since,
            None => false,
        }
    }

    /// `If-None-Match`, or failing that `If-Modified-Since`.
    fn not_modified(&self, headers: &HeaderMap) -> bool {
        if let Some(list) = header_list(headers, &IF_NONE_MATCH) {
            return etag_list_matches(&list, &self.etag, true);
        }
        match header_str(headers, &IF_MODIFIED_SINCE).and_then(parse_http_date) {
            Some(since) => self.last_modified <= since,
            None => false,
        }
    }

    /// A range is honoured only if `If-Range` is absent or still current.
    fn if_range_allows(&self, headers: &HeaderMap) -> bool {
        let Some(value) = header_str(headers, &IF_RANGE) else {
            return true;
        };
        let value = value.trim();
        if value.starts_with('"') {
            value == self.etag
        } else if value.starts_with("W/") {
            false
        } else {
            parse_http_date(value) == Some(self.last_modified)
        }
    }

    fn validator_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        insert(&mut headers, ETAG, &self.etag);
        if let Some(date) = format_http_date(self.object.fetched_at()) {
            insert(&mut headers, LAST_MODIFIED, &date);
        }
        headers
    }

    fn representation_headers(&self) -> HeaderMap {
        let mut headers = self.validator_headers();
        headers.insert(ACCEPT_RANGES, HeaderValue::from_static("bytes"));
        if !self.object.content_type().is_empty() {
            insert(&mut headers, CONTENT_TYPE, self.object.content_type());
        }
        headers
    }

    fn without_body(&self, status: StatusCode) -> Response {
        (status, self.validator_headers(), Body::empty()).into_response()
    }
}

fn insert(headers: &mut HeaderMap, name: axum::http::HeaderName, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(name, value);
    }
}

fn header_str<'h>(headers: &'h HeaderMap, name: &axum::http::HeaderName) -> Option<&'h str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// All values of a list-valued header joined with commas.
fn header_list(headers: &HeaderMap, name: &axum::http::HeaderName) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(name)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

fn etag_list_matches(list: &str, etag: &str, weak: bool) -> bool {
    list.split(',').map(str::trim).any(|candidate| {
        if candidate == "*" {
            return true;
        }
        if weak {
            opaque_tag(candidate) == opaque_tag(etag)
        } else {
            !candidate.starts_with("W/") && candidate == etag
        }
    })
}

fn opaque_tag(tag: &str) -> &str {
    tag.strip_prefix("W/").unwrap_or(tag)
}
