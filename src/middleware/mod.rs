//! Middleware layer.
//!
//! Middleware wraps a [`Handler`](crate::Handler) and returns another one, so
//! layers compose by plain function application before the server starts.
//!
//! - [`Preflight`] — fixed CORS / no-store headers, `OPTIONS` short-circuit

mod preflight;

pub use preflight::{Flow, Preflight, empty};
