//! Logic errors.

use std::fmt::Display;

use ctrlhora_models::ClockEventKind;
use thiserror::Error;

use crate::geolocation::GeolocationError;

/// User administration action, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    List,
    Create,
    Update,
    Delete,
}

impl Display for UserAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::List => "list users",
            Self::Create => "create user",
            Self::Update => "update user",
            Self::Delete => "delete user",
        })
    }
}

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Login failed: {source}")]
    LoginFailed {
        source: ctrlhora_api_interface::ApiError,
    },

    #[error("{} registration failed: {}", .kind.label(), .source)]
    ClockEventFailed {
        kind: ClockEventKind,
        source: ctrlhora_api_interface::ApiError,
    },

    #[error("Could not {action}: {source}")]
    UserAdministrationFailed {
        action: UserAction,
        source: ctrlhora_api_interface::ApiError,
    },

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Administrators cannot register {}", plural_label(.kind))]
    AdminCannotClock { kind: ClockEventKind },

    #[error(transparent)]
    GeolocationError { source: GeolocationError },

    /// Wraps [`ctrlhora_session_interface::SessionError`].
    #[error("Session storage error: {source}")]
    SessionError {
        source: ctrlhora_session_interface::SessionError,
    },
}

fn plural_label(kind: &ClockEventKind) -> &'static str {
    match kind {
        ClockEventKind::Entry => "entries",
        ClockEventKind::Exit => "exits",
    }
}

impl From<GeolocationError> for DomainError {
    fn from(e: GeolocationError) -> Self {
        Self::GeolocationError { source: e }
    }
}

impl From<ctrlhora_session_interface::SessionError> for DomainError {
    fn from(e: ctrlhora_session_interface::SessionError) -> Self {
        Self::SessionError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
