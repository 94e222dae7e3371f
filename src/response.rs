//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! The endpoint never sends content, so a [`Response`] has no body at all:
//! only a status and headers.

use bytes::Bytes;
use http::StatusCode;
use http::header::{HeaderName, HeaderValue};
use http_body_util::Full;

use crate::headers::HeaderSet;

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response with an empty body.
///
/// Headers are an ordered list, so a name may appear more than once and
/// goes on the wire in the order it was added.
///
/// ```rust
/// use http::StatusCode;
/// use preflight::Response;
///
/// Response::empty();
/// Response::status(StatusCode::NO_CONTENT);
///
/// Response::builder()
///     .status(StatusCode::ACCEPTED)
///     .header(http::header::LOCATION, http::HeaderValue::from_static("/next"))
///     .no_body();
/// ```
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    headers: Vec<(HeaderName, HeaderValue)>,
}

impl Response {
    /// `200 OK`.
    pub fn empty() -> Self {
        Self::status(StatusCode::OK)
    }

    pub fn status(code: StatusCode) -> Self {
        Self { status: code, headers: Vec::new() }
    }

    /// Builder for responses that need a custom status or extra headers.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { headers: Vec::new(), status: StatusCode::OK }
    }

    pub fn status_code(&self) -> StatusCode { self.status }

    pub fn headers(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        self.headers.iter().map(|(n, v)| (n, v))
    }

    /// Puts every header of `set` in front of the headers already present.
    pub(crate) fn prepend(&mut self, set: &HeaderSet) {
        let mut headers: Vec<_> = set.iter()
            .map(|(n, v)| (n.clone(), v.clone()))
            .collect();
        headers.append(&mut self.headers);
        self.headers = headers;
    }

    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(Bytes::new()));
        *res.status_mut() = self.status;
        let map = res.headers_mut();
        for (name, value) in self.headers {
            map.append(name, value);
        }
        res
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`].
///
/// Obtain via [`Response::builder()`]. Defaults to `200 OK`.
pub struct ResponseBuilder {
    headers: Vec<(HeaderName, HeaderValue)>,
    status: StatusCode,
}

impl ResponseBuilder {
    pub fn status(mut self, code: StatusCode) -> Self {
        self.status = code;
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.push((name, value));
        self
    }

    pub fn no_body(self) -> Response {
        Response { status: self.status, headers: self.headers }
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

/// `()` is the empty `200 OK`.
impl IntoResponse for () {
    fn into_response(self) -> Response { Response::empty() }
}

impl IntoResponse for StatusCode {
    fn into_response(self) -> Response { Response::status(self) }
}
