use serde::{Deserialize, Serialize};

/// User, as listed by the server.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Default)]
pub struct User {
    /// Server-side identifier.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Username.
    pub username: String,
    /// Administrator flag.
    #[serde(default)]
    pub is_admin: bool,
    /// Full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Chilean national identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rut: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// User creation payload.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Default)]
pub struct NewUser {
    /// Username.
    pub username: String,
    /// Password, never read back.
    pub password: String,
    /// Administrator flag.
    pub is_admin: bool,
    /// Full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Chilean national identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rut: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// User update payload.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Default)]
pub struct UserUpdate {
    /// Username, not editable.
    pub username: String,
    /// New password, unchanged when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Administrator flag.
    pub is_admin: bool,
}
