//! Mock credential sign-in endpoints.

use axum::extract::State;

use super::{success, ApiJson, ApiResult};
use crate::errors::AppError;
use crate::models::{AuthState, SignInRequest};
use crate::AppState;

/// GET /api/auth - Current mock sign-in state.
pub async fn get_auth_state(State(state): State<AppState>) -> ApiResult<AuthState> {
    let auth = state.auth.read().await;
    success(auth.state().clone())
}

/// POST /api/auth/sign-in - Sign in with the mock account.
pub async fn sign_in(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SignInRequest>,
) -> ApiResult<AuthState> {
    let mut auth = state.auth.write().await;

    if !auth.sign_in(&request.email, &request.password) {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    success(auth.state().clone())
}

/// POST /api/auth/sign-out - Sign the mock user out.
pub async fn sign_out(State(state): State<AppState>) -> ApiResult<AuthState> {
    let mut auth = state.auth.write().await;
    auth.sign_out();
    success(auth.state().clone())
}
