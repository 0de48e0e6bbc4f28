//! Shared error types across reqtime crates.

use thiserror::Error;

/// Stable error codes for startup/config failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid config value / malformed file.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal failure (I/O and the like).
    Internal,
}

impl ErrorCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ReqtimeError>;

/// Configuration and startup errors.
#[derive(Debug, Error)]
pub enum ReqtimeError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl ReqtimeError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ReqtimeError::BadRequest(_) => ErrorCode::BadRequest,
            ReqtimeError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            ReqtimeError::Internal(_) => ErrorCode::Internal,
        }
    }
}

/// The metrics backend could not accept or transmit a batch of points.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend connection failed: {0}")]
    Connect(String),
    #[error("backend rejected write (status {status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("point encoding failed: {0}")]
    Encode(String),
    #[error("backend protocol error: {0}")]
    Protocol(String),
}

/// Registrable-domain lookup failed for a referer URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TldError {
    #[error("malformed url: {0}")]
    BadUrl(String),
    #[error("url has no host")]
    NoHost,
    #[error("no registrable domain for host {0}")]
    DomainNotFound(String),
}
