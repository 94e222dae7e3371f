//! Cache-busting directives.

use http::header::{CACHE_CONTROL, HeaderValue, PRAGMA};

use crate::headers::HeaderSet;

const NO_STORE: &str = "no-store, no-cache, must-revalidate, max-age=0, s-maxage=0";
const LEGACY_CHECKS: &str = "post-check=0, pre-check=0";
const COLLAPSED: &str =
    "no-store, no-cache, must-revalidate, max-age=0, s-maxage=0, post-check=0, pre-check=0";

/// Forbids every cache between the server and the client from keeping the
/// response, so each latency probe really reaches the server.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NoStore {
    collapsed: bool,
}

impl NoStore {
    /// Two `Cache-Control` lines: the standard directives, then the legacy
    /// IE `post-check`/`pre-check` pair. Existing clients see this exact shape.
    pub fn split() -> Self {
        Self { collapsed: false }
    }

    /// One `Cache-Control` line carrying every directive.
    pub fn collapsed() -> Self {
        Self { collapsed: true }
    }

    /// Appends `Cache-Control` and `Pragma: no-cache` to `set`.
    pub fn apply(self, set: HeaderSet) -> HeaderSet {
        let set = if self.collapsed {
            set.append(CACHE_CONTROL, HeaderValue::from_static(COLLAPSED))
        } else {
            set.append(CACHE_CONTROL, HeaderValue::from_static(NO_STORE))
                .append(CACHE_CONTROL, HeaderValue::from_static(LEGACY_CHECKS))
        };
        set.append(PRAGMA, HeaderValue::from_static("no-cache"))
    }
}

impl Default for NoStore {
    fn default() -> Self { Self::split() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_sends_both_values() {
        let set = NoStore::split().apply(HeaderSet::new());
        let values: Vec<_> = set.get_all("cache-control").map(|v| v.to_str().unwrap()).collect();
        assert_eq!(values, [NO_STORE, LEGACY_CHECKS]);
        assert_eq!(set.get_all("pragma").count(), 1);
    }

    #[test]
    fn collapsed_sends_one_value() {
        let set = NoStore::collapsed().apply(HeaderSet::new());
        let values: Vec<_> = set.get_all("cache-control").collect();
        assert_eq!(values, [&HeaderValue::from_static(COLLAPSED)]);
    }
}
