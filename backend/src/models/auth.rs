//! Mock sign-in state matching the frontend AuthState interface.

use serde::{Deserialize, Serialize};

/// Public view of the signed-in mock user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    pub email: String,
    pub name: String,
}

/// Whether someone is signed in with the mock credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<AuthUser>,
}

/// Request body for the mock credential sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}
