//! Origins the service is permitted to fetch from.

use std::collections::HashSet;

/// Immutable set of allowed origin identifiers.
///
/// Membership is an exact string comparison, so entries must carry the
/// scheme (`https://example.test`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    origins: HashSet<String>,
}

impl AllowList {
    /// Builds an allow-list from any collection of origin strings.
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            origins: origins.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `origin` may be fetched.
    pub fn contains(&self, origin: &str) -> bool {
        self.origins.contains(origin)
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    /// Iterates over the allowed origins, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for AllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
