//! # preflight
//!
//! The empty endpoint a browser network test talks to: every request gets a
//! `200 OK`, an empty body, and a fixed header set that allows any origin and
//! forbids every cache on the way.
//!
//! ## The contract
//!
//! Any path, any method. Headers, in order:
//!
//! ```text
//! Access-Control-Allow-Origin: *
//! Access-Control-Allow-Methods: GET, POST, OPTIONS
//! Access-Control-Allow-Headers: Content-Type, Content-Encoding, X-Requested-With
//! Cache-Control: no-store, no-cache, must-revalidate, max-age=0, s-maxage=0
//! Cache-Control: post-check=0, pre-check=0
//! Pragma: no-cache
//! Connection: keep-alive
//! ```
//!
//! `OPTIONS` (exact, case-sensitive) is a CORS preflight and stops right
//! after the headers. Everything else falls through to an inner handler,
//! which by default returns nothing either.
//!
//! Request bodies are drained and discarded, so upload probes can POST
//! megabytes at the endpoint over one keep-alive connection.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use preflight::{Preflight, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), preflight::Error> {
//!     Server::bind("0.0.0.0:3000")?
//!         .serve(Preflight::standard().into_handler())
//!         .await
//! }
//! ```
//!
//! The header set is plain configuration, built once and injected:
//!
//! ```rust
//! use preflight::{Cors, HeaderSet, Method, NoStore, Preflight};
//!
//! # fn main() -> Result<(), preflight::Error> {
//! let cors = Cors::permissive()
//!     .allow_origin("https://speed.example.com")?
//!     .allow_methods(&[Method::Get, Method::Post, Method::Options])?;
//! let headers = NoStore::collapsed().apply(cors.apply(HeaderSet::new()));
//! let endpoint = Preflight::new(headers).into_handler();
//! # let _ = endpoint;
//! # Ok(())
//! # }
//! ```

mod cache;
mod cors;
mod error;
mod handler;
mod headers;
mod method;
mod request;
mod response;
mod server;

pub mod middleware;

pub use cache::NoStore;
pub use cors::Cors;
pub use error::Error;
pub use handler::Handler;
pub use headers::HeaderSet;
pub use method::Method;
pub use middleware::Preflight;
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use server::Server;
