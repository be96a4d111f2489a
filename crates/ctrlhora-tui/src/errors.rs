//! UI errors.

use thiserror::Error;

/// UI error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum UiError {
    /// Wraps [`std::io::Error`].
    #[error("I/O error,\n  caused by: {}", source)]
    IoError { source: std::io::Error },
}

impl From<std::io::Error> for UiError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError { source: e }
    }
}

/// Result alias for `UiError`.
pub type Result<T> = core::result::Result<T, UiError>;
