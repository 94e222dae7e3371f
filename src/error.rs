//! Unified error type.

use std::fmt;
use std::net::AddrParseError;

/// The error type returned by preflight's fallible operations.
///
/// Serving a request never fails: every request gets a `200 OK`. This type
/// surfaces setup and infrastructure failures: an unparsable bind address, a
/// header value that is not legal on the wire, binding to a port.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Addr(AddrParseError),
    InvalidHeader(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e)            => write!(f, "io: {e}"),
            Self::Addr(e)          => write!(f, "invalid socket address: {e}"),
            Self::InvalidHeader(h) => write!(f, "invalid header: {h}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e)            => Some(e),
            Self::Addr(e)          => Some(e),
            Self::InvalidHeader(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<AddrParseError> for Error {
    fn from(e: AddrParseError) -> Self {
        Self::Addr(e)
    }
}
