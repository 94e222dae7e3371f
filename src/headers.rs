//! Ordered, multi-valued response header configuration.
//!
//! A [`HeaderSet`] is built once at startup and handed to
//! [`Preflight`](crate::middleware::Preflight). It is shared read-only across
//! every request — there is no global header state to mutate.

use http::header::{CONNECTION, HeaderMap, HeaderName, HeaderValue};

use crate::cache::NoStore;
use crate::cors::Cors;
use crate::error::Error;

/// An ordered list of response headers where one name may carry many values.
///
/// Two ways to add a header, mirroring the two behaviours HTTP servers offer:
///
/// - [`append`](HeaderSet::append) adds a value next to any existing ones.
/// - [`insert`](HeaderSet::insert) drops every previous value for the name first.
///
/// ```rust
/// use http::header::{CACHE_CONTROL, HeaderValue};
/// use preflight::HeaderSet;
///
/// let set = HeaderSet::new()
///     .append(CACHE_CONTROL, HeaderValue::from_static("no-store"))
///     .append(CACHE_CONTROL, HeaderValue::from_static("pre-check=0"));
///
/// assert_eq!(set.get_all("cache-control").count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeaderSet {
    entries: Vec<(HeaderName, HeaderValue)>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// The header set the empty endpoint sends on every response:
    /// permissive CORS, split no-store cache directives, keep-alive.
    pub fn standard() -> Self {
        let set = Cors::permissive().apply(Self::new());
        NoStore::split()
            .apply(set)
            .append(CONNECTION, HeaderValue::from_static("keep-alive"))
    }

    /// Adds a value. Existing values for `name` are kept.
    pub fn append(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.entries.push((name, value));
        self
    }

    /// Replaces every existing value for `name` with `value`, placed last.
    pub fn insert(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.entries.retain(|(n, _)| *n != name);
        self.entries.push((name, value));
        self
    }

    /// [`append`](HeaderSet::append) from untyped strings, for configuration
    /// that arrives at runtime.
    pub fn try_append(self, name: &str, value: &str) -> Result<Self, Error> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| Error::InvalidHeader(format!("name {name:?}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| Error::InvalidHeader(format!("value {value:?} for {name}")))?;
        Ok(self.append(name, value))
    }

    /// All values for `name` (case-insensitive), in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a HeaderValue> + 'a {
        self.entries.iter()
            .filter(move |(n, _)| n.as_str().eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        self.entries.iter().map(|(n, v)| (n, v))
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Copies the set into an [`http::HeaderMap`], keeping every value.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut map = HeaderMap::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            map.append(name.clone(), value.clone());
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, PRAGMA};

    fn names(set: &HeaderSet) -> Vec<&str> {
        set.iter().map(|(n, _)| n.as_str()).collect()
    }

    #[test]
    fn standard_set_is_complete_and_ordered() {
        let set = HeaderSet::standard();
        assert_eq!(names(&set), [
            "access-control-allow-origin",
            "access-control-allow-methods",
            "access-control-allow-headers",
            "cache-control",
            "cache-control",
            "pragma",
            "connection",
        ]);

        let values: Vec<_> = set.iter().map(|(_, v)| v.to_str().unwrap()).collect();
        assert_eq!(values, [
            "*",
            "GET, POST, OPTIONS",
            "Content-Type, Content-Encoding, X-Requested-With",
            "no-store, no-cache, must-revalidate, max-age=0, s-maxage=0",
            "post-check=0, pre-check=0",
            "no-cache",
            "keep-alive",
        ]);
    }

    #[test]
    fn append_keeps_previous_values() {
        let set = HeaderSet::new()
            .append(CACHE_CONTROL, HeaderValue::from_static("a"))
            .append(CACHE_CONTROL, HeaderValue::from_static("b"));
        let all: Vec<_> = set.get_all("Cache-Control").collect();
        assert_eq!(all, [&HeaderValue::from_static("a"), &HeaderValue::from_static("b")]);
    }

    #[test]
    fn insert_replaces_every_value_and_moves_last() {
        let set = HeaderSet::new()
            .append(CACHE_CONTROL, HeaderValue::from_static("a"))
            .append(PRAGMA, HeaderValue::from_static("no-cache"))
            .append(CACHE_CONTROL, HeaderValue::from_static("b"))
            .insert(CACHE_CONTROL, HeaderValue::from_static("c"));
        assert_eq!(names(&set), ["pragma", "cache-control"]);
        assert_eq!(set.get_all("cache-control").count(), 1);
    }

    #[test]
    fn try_append_rejects_illegal_input() {
        assert!(matches!(
            HeaderSet::new().try_append("bad header", "x"),
            Err(Error::InvalidHeader(_)),
        ));
        assert!(matches!(
            HeaderSet::new().try_append("x-ok", "line\nbreak"),
            Err(Error::InvalidHeader(_)),
        ));
        let set = HeaderSet::new().try_append("X-Test", "1").unwrap();
        assert_eq!(names(&set), ["x-test"]);
    }

    #[test]
    fn header_map_keeps_duplicates() {
        let map = HeaderSet::standard().to_header_map();
        assert_eq!(map.get_all(CACHE_CONTROL).iter().count(), 2);
        assert_eq!(map.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert_eq!(map.len(), 7);
    }
}
