//! API payloads.

use serde::{Deserialize, Serialize};

/// Response of a successful login.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Default)]
pub struct LoginResponse {
    /// Bearer token.
    pub access_token: String,
    /// Token type.
    #[serde(default)]
    pub token_type: String,
}

/// Acknowledgment returned by mutating endpoints.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Default)]
pub struct ApiMessage {
    /// Server message.
    #[serde(default)]
    pub message: String,
}

impl ApiMessage {
    /// Creates a message.
    pub fn new<T: Into<String>>(message: T) -> Self {
        Self {
            message: message.into(),
        }
    }
}
