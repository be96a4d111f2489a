use thiserror::Error;

/// Session storage error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session storage I/O error on '{}': {}", path, source)]
    IoError {
        path: String,
        source: std::io::Error,
    },

    #[error("Stored session is malformed: {}", source)]
    JsonError { source: serde_json::Error },
}

/// Result alias for `SessionError`.
pub type Result<T, E = SessionError> = core::result::Result<T, E>;
