//! `Access-Control-Allow-*` header rendering.

use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    HeaderName, HeaderValue,
};

use crate::error::Error;
use crate::headers::HeaderSet;
use crate::method::Method;

/// CORS response policy.
///
/// Values are validated when set, so [`apply`](Cors::apply) cannot fail.
#[derive(Clone, Debug)]
pub struct Cors {
    allow_origin: HeaderValue,
    allow_methods: HeaderValue,
    allow_headers: HeaderValue,
}

impl Cors {
    /// Any origin; `GET, POST, OPTIONS`; the headers a browser upload test sends.
    pub fn permissive() -> Self {
        Self {
            allow_origin: HeaderValue::from_static("*"),
            allow_methods: HeaderValue::from_static("GET, POST, OPTIONS"),
            allow_headers: HeaderValue::from_static(
                "Content-Type, Content-Encoding, X-Requested-With",
            ),
        }
    }

    pub fn allow_origin(mut self, origin: &str) -> Result<Self, Error> {
        self.allow_origin = HeaderValue::from_str(origin)
            .map_err(|_| Error::InvalidHeader(format!("origin {origin:?}")))?;
        Ok(self)
    }

    pub fn allow_methods(mut self, methods: &[Method]) -> Result<Self, Error> {
        let list = Method::join(methods);
        self.allow_methods = HeaderValue::from_str(&list)
            .map_err(|_| Error::InvalidHeader(format!("methods {list:?}")))?;
        Ok(self)
    }

    /// Each name must be a valid header token. The caller's spelling is
    /// what goes on the wire.
    pub fn allow_headers(mut self, names: &[&str]) -> Result<Self, Error> {
        if let Some(bad) = names.iter().find(|n| HeaderName::from_bytes(n.as_bytes()).is_err()) {
            return Err(Error::InvalidHeader(format!("name {bad:?}")));
        }
        let list = names.join(", ");
        self.allow_headers = HeaderValue::from_str(&list)
            .map_err(|_| Error::InvalidHeader(format!("names {list:?}")))?;
        Ok(self)
    }

    /// Appends origin, methods and headers to `set`, in that order.
    pub fn apply(&self, set: HeaderSet) -> HeaderSet {
        set.append(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone())
            .append(ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods.clone())
            .append(ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers.clone())
    }
}

impl Default for Cors {
    fn default() -> Self { Self::permissive() }
}
