use serde::{Deserialize, Serialize};

/// Authenticated session.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct Session {
    /// Opaque bearer token.
    pub access_token: String,
    /// Token type, as returned by the server.
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Username used to log in.
    pub username: String,
    /// Whether the account can reach the user administration endpoints.
    #[serde(default)]
    pub is_admin: bool,
}

fn default_token_type() -> String {
    "bearer".into()
}

impl Session {
    /// Role name, for display.
    pub fn role(&self) -> &'static str {
        if self.is_admin {
            "administrator"
        } else {
            "user"
        }
    }
}
