//! Incoming HTTP request type.

use http::HeaderMap;
use http::request::Parts;

/// An incoming HTTP request.
///
/// The body has already been read and discarded by the server. Only its
/// length is kept, see [`Request::body_len`].
pub struct Request {
    method: http::Method,
    path: String,
    headers: HeaderMap,
    body_len: u64,
}

impl Request {
    pub(crate) fn new(parts: Parts, body_len: u64) -> Self {
        Self {
            method: parts.method,
            path: parts.uri.path().to_owned(),
            headers: parts.headers,
            body_len,
        }
    }

    /// The method exactly as the client sent it. Extension methods and
    /// odd casing (`options`) come through untouched.
    pub fn method(&self) -> &str { self.method.as_str() }
    pub fn path(&self) -> &str { &self.path }
    pub fn headers(&self) -> &HeaderMap { &self.headers }

    /// Number of body bytes the client sent.
    pub fn body_len(&self) -> u64 { self.body_len }

    /// Case-insensitive header lookup. Values that are not visible ASCII
    /// are treated as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[cfg(test)]
pub(crate) fn test_request(method: &str, path: &str) -> Request {
    let (parts, ()) = http::Request::builder()
        .method(method)
        .uri(path)
        .header("origin", "http://example.com")
        .body(())
        .unwrap()
        .into_parts();
    Request::new(parts, 0)
}
