//! Sign-in handling: identity-provider callback parsing and the mock
//! credential login.
//!
//! The mock login accepts one hardcoded account and is not a security boundary.

use std::collections::HashMap;

use subtle::ConstantTimeEq;

use crate::models::{AuthProvider, AuthState, AuthUser, UserSession};

/// Error shown when the identity provider sends an incomplete callback.
pub const INVALID_CALLBACK_MESSAGE: &str =
    "Invalid auth callback payload. Required: provider, id, and name.";

/// The single account the mock login accepts.
pub struct MockUser {
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
}

pub const MOCK_USER: MockUser = MockUser {
    email: "admin@admin.com",
    password: "admin123",
    name: "Admin",
};

/// Query parameters delivered by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackParams {
    pub provider: AuthProvider,
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

impl CallbackParams {
    pub fn into_session(self) -> UserSession {
        UserSession {
            id: self.id,
            name: self.name,
            provider: self.provider,
            avatar_url: self.avatar_url,
        }
    }
}

/// Extract callback parameters. `provider`, `id` and `name` must be present
/// and non-empty, and the provider must be one we know.
pub fn parse_callback_params(query: &HashMap<String, String>) -> Option<CallbackParams> {
    let non_empty = |key: &str| query.get(key).filter(|v| !v.is_empty());

    let provider = AuthProvider::parse(non_empty("provider")?)?;
    let id = non_empty("id")?.clone();
    let name = non_empty("name")?.clone();
    let avatar_url = query.get("avatarUrl").cloned();

    Some(CallbackParams {
        provider,
        id,
        name,
        avatar_url,
    })
}

/// Check a login attempt against the mock account.
pub fn is_valid_credentials(email: &str, password: &str) -> bool {
    let email_ok = constant_time_compare(email, MOCK_USER.email);
    let password_ok = constant_time_compare(password, MOCK_USER.password);
    email_ok & password_ok
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Mock login state.
#[derive(Debug, Clone, Default)]
pub struct AuthStore {
    state: AuthState,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Sign in with the mock account. A failed attempt also signs out.
    pub fn sign_in(&mut self, email: &str, password: &str) -> bool {
        if !is_valid_credentials(email, password) {
            tracing::info!("Rejected mock sign-in");
            self.state = AuthState::default();
            return false;
        }

        self.state = AuthState {
            is_authenticated: true,
            user: Some(AuthUser {
                email: MOCK_USER.email.to_string(),
                name: MOCK_USER.name.to_string(),
            }),
        };
        tracing::info!("Mock user signed in");
        true
    }

    pub fn sign_out(&mut self) {
        self.state = AuthState::default();
    }
}
