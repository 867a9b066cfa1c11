//! Shared error type across PulseSim crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PulseSimError>;

/// Unified error type used by core and server.
///
/// The simulators themselves never return this across their boundary; the
/// simulated transient failure is always converted into an in-band
/// `success = false` result. This type covers config loading and request
/// validation only.
#[derive(Debug, Error)]
pub enum PulseSimError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl PulseSimError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            PulseSimError::BadRequest(_) => ClientCode::BadRequest,
            PulseSimError::Internal(_) => ClientCode::Internal,
        }
    }
}
