//! Parsing of the `url` query parameter into (origin, resource).

use std::fmt;

/// Scheme assumed when the input carries neither `https://` nor `http://`.
///
/// Kept verbatim for client compatibility; such origins only resolve if the
/// allow-list contains them.
pub const FALLBACK_SCHEME: &str = "httpd://";

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Origin/resource pair extracted from a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTarget {
    origin: String,
    resource: String,
}

impl FetchTarget {
    /// Parses `<scheme>://<host>/<resource>`.
    ///
    /// A leading `https://` or `http://` is stripped and becomes the origin's
    /// scheme; any other input is prefixed with [`FALLBACK_SCHEME`] as-is.
    /// Trailing slashes are dropped, then the remainder is split on the
    /// first `/`. Returns `None` when there is no `/` after the host.
    ///
    /// # Examples
    ///
    /// ```
    /// use eddy_server::extractors::FetchTarget;
    ///
    /// let target = FetchTarget::parse("https://example.test/essays/a.html").unwrap();
    /// assert_eq!(target.origin(), "https://example.test");
    /// assert_eq!(target.resource(), "essays/a.html");
    ///
    /// let target = FetchTarget::parse("example.test/a").unwrap();
    /// assert_eq!(target.origin(), "httpd://example.test");
    ///
    /// assert!(FetchTarget::parse("https://example.test/").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let (scheme, rest) = SCHEMES
            .iter()
            .find_map(|scheme| raw.strip_prefix(scheme).map(|rest| (*scheme, rest)))
            .unwrap_or((FALLBACK_SCHEME, raw));

        let (host, resource) = rest.trim_end_matches('/').split_once('/')?;

        Some(Self {
            origin: format!("{}{}", scheme, host),
            resource: resource.to_string(),
        })
    }

    /// Origin identifier, scheme included.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Resource identifier within the origin.
    pub fn resource(&self) -> &str {
        &self.resource
    }
}

impl fmt::Display for FetchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.origin, self.resource)
    }
}
