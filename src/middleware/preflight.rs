//! CORS preflight handling.
//!
//! Every response, whatever the method or path, carries the configured
//! [`HeaderSet`]. Then:
//!
//! ```text
//!              ┌── method == "OPTIONS" ──▶ Terminate: 200, empty body
//! HeadersSet ──┤
//!              └── anything else ────────▶ Continue:  inner handler runs
//! ```
//!
//! The match is exact and case-sensitive. A request sent as `options` is not
//! a preflight and continues to the inner handler.

use std::sync::Arc;

use tracing::debug;

use crate::handler::Handler;
use crate::headers::HeaderSet;
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;

/// What happens after the headers are set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    /// Preflight: stop here with an empty body.
    Terminate,
    /// Hand the request to the inner handler.
    Continue,
}

/// Applies a fixed [`HeaderSet`] to every response and answers preflights.
///
/// ```rust,no_run
/// use preflight::{Preflight, Server};
///
/// # async fn run() -> Result<(), preflight::Error> {
/// Server::bind("0.0.0.0:3000")?
///     .serve(Preflight::standard().into_handler())
///     .await
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Preflight {
    headers: Arc<HeaderSet>,
}

impl Preflight {
    pub fn new(headers: HeaderSet) -> Self {
        Self { headers: Arc::new(headers) }
    }

    /// Uses [`HeaderSet::standard`].
    pub fn standard() -> Self {
        Self::new(HeaderSet::standard())
    }

    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    pub fn flow(method: &str) -> Flow {
        if method == Method::Options.as_str() {
            Flow::Terminate
        } else {
            Flow::Continue
        }
    }

    /// Wraps `inner`. The header set goes in front of any header `inner`
    /// adds; `inner` never sees preflight requests.
    pub fn wrap(self, inner: impl Handler) -> impl Handler {
        let headers = self.headers;
        let inner = inner.into_boxed_handler();

        move |req: Request| {
            let headers = Arc::clone(&headers);
            let inner = Arc::clone(&inner);
            async move {
                let mut res = match Self::flow(req.method()) {
                    Flow::Terminate => {
                        debug!(path = req.path(), origin = req.header("origin"), "preflight");
                        Response::empty()
                    }
                    Flow::Continue => inner.call(req).await,
                };
                res.prepend(&headers);
                res
            }
        }
    }

    /// The complete endpoint: every request gets the headers and an empty body.
    pub fn into_handler(self) -> impl Handler {
        self.wrap(empty)
    }
}

impl Default for Preflight {
    fn default() -> Self { Self::standard() }
}

/// Fall-through handler: `200 OK`, no body.
pub async fn empty(_req: Request) -> Response {
    Response::empty()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use http::StatusCode;
    use http::header::{HeaderValue, LOCATION};

    use super::*;
    use crate::handler::BoxedHandler;
    use crate::request::test_request;

    fn endpoint() -> BoxedHandler {
        Preflight::standard().into_handler().into_boxed_handler()
    }

    fn values<'a>(res: &'a Response, name: &str) -> Vec<&'a str> {
        res.headers()
            .filter(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v.to_str().unwrap())
            .collect()
    }

    #[test]
    fn only_exact_options_terminates() {
        assert_eq!(Preflight::flow("OPTIONS"), Flow::Terminate);
        assert_eq!(Preflight::flow("options"), Flow::Continue);
        assert_eq!(Preflight::flow("GET"), Flow::Continue);
        assert_eq!(Preflight::flow("PURGE"), Flow::Continue);
    }

    #[tokio::test]
    async fn options_preflight_gets_the_full_set() {
        let res = endpoint().call(test_request("OPTIONS", "/empty.php")).await;
        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(values(&res, "access-control-allow-origin"), ["*"]);
        assert_eq!(values(&res, "cache-control"), [
            "no-store, no-cache, must-revalidate, max-age=0, s-maxage=0",
            "post-check=0, pre-check=0",
        ]);
        assert_eq!(res.headers().count(), 7);
    }

    #[tokio::test]
    async fn every_method_gets_200_and_the_full_set() {
        for method in ["GET", "POST", "PUT", "DELETE", "HEAD", "PATCH", "PURGE", "options"] {
            let res = endpoint().call(test_request(method, "/empty.php")).await;
            assert_eq!(res.status_code(), StatusCode::OK, "{method}");
            assert_eq!(values(&res, "pragma"), ["no-cache"], "{method}");
            assert_eq!(values(&res, "connection"), ["keep-alive"], "{method}");
        }
    }

    #[tokio::test]
    async fn inner_handler_skipped_for_preflight_only() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);

        let handler = Preflight::standard()
            .wrap(|_req: Request| async {
                CALLS.fetch_add(1, Ordering::SeqCst);
                Response::builder()
                    .status(StatusCode::ACCEPTED)
                    .header(LOCATION, HeaderValue::from_static("/next"))
                    .no_body()
            })
            .into_boxed_handler();

        let pre = handler.call(test_request("OPTIONS", "/")).await;
        assert_eq!(pre.status_code(), StatusCode::OK);
        assert_eq!(pre.headers().count(), 7);
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);

        let res = handler.call(test_request("POST", "/")).await;
        assert_eq!(res.status_code(), StatusCode::ACCEPTED);
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);

        let names: Vec<_> = res.headers().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names[0], "access-control-allow-origin");
        assert_eq!(&names[7..], ["location"]);
    }

    #[tokio::test]
    async fn injected_set_replaces_standard() {
        let set = HeaderSet::new().try_append("x-endpoint", "empty").unwrap();
        let preflight = Preflight::new(set);
        assert_eq!(preflight.headers().len(), 1);
        let handler = preflight.into_handler().into_boxed_handler();
        let res = handler.call(test_request("GET", "/")).await;
        assert_eq!(values(&res, "x-endpoint"), ["empty"]);
        assert_eq!(res.headers().count(), 1);
    }
}
