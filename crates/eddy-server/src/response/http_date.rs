//! HTTP-date formatting and parsing.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Last second `httpdate` can represent (9999-12-31T23:59:59Z).
const MAX_HTTP_DATE: i64 = 253_402_300_799;

/// Whole seconds since the epoch; HTTP dates have no sub-second precision.
pub fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() as i64,
        Err(before) => -(before.duration().as_secs() as i64),
    }
}

/// Formats `time` as IMF-fixdate (`Sun, 06 Nov 1994 08:49:37 GMT`).
///
/// Returns `None` outside the years 1970..=9999.
pub fn format_http_date(time: SystemTime) -> Option<String> {
    let seconds = unix_seconds(time);
    if !(0..=MAX_HTTP_DATE).contains(&seconds) {
        return None;
    }
    Some(httpdate::fmt_http_date(
        UNIX_EPOCH + Duration::from_secs(seconds as u64),
    ))
}

/// Parses an HTTP-date into seconds since the epoch.
///
/// Accepts IMF-fixdate plus the obsolete RFC 850 and asctime forms.
pub fn parse_http_date(value: &str) -> Option<i64> {
    httpdate::parse_http_date(value.trim())
        .ok()
        .map(unix_seconds)
}
