//! Signed-in user session matching the frontend UserSession interface.

use serde::{Deserialize, Serialize};

/// External identity provider that signed the user in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Google,
    X,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
            AuthProvider::X => "x",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "google" => Some(AuthProvider::Google),
            "x" => Some(AuthProvider::X),
            _ => None,
        }
    }
}

/// Identity of the user signed in on this client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub id: String,
    pub name: String,
    pub provider: AuthProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}
