//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server answered with a non-success status.
    #[error("server responded with status {}: {}", status, detail)]
    UnexpectedStatus { status: u16, detail: String },

    /// Server answered with a success status and an unreadable body.
    #[error("server responded with status {} and an unreadable body: {}", status, message)]
    InvalidResponse { status: u16, message: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
