//! HTTP method as a typed enum.
//!
//! Covers the RFC 9110 standard methods. Used to render
//! `Access-Control-Allow-Methods` and to name the preflight method.
//!
//! Requests are never rejected on their method: a method string with no
//! [`Method`] variant (`PURGE`, `options`, …) still reaches the handler.

/// A standard HTTP method.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    Connect,
    Delete,
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
    Trace,
}

impl Method {
    /// Returns the uppercase wire representation (e.g. `"GET"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connect => "CONNECT",
            Self::Delete  => "DELETE",
            Self::Get     => "GET",
            Self::Head    => "HEAD",
            Self::Options => "OPTIONS",
            Self::Patch   => "PATCH",
            Self::Post    => "POST",
            Self::Put     => "PUT",
            Self::Trace   => "TRACE",
        }
    }

    /// Joins methods into a comma-separated list: `GET, POST, OPTIONS`.
    pub fn join(methods: &[Method]) -> String {
        methods.iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
