//! Session and identity-provider callback endpoints.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::Redirect,
};

use super::{success, ApiResult};
use crate::auth::{parse_callback_params, INVALID_CALLBACK_MESSAGE};
use crate::errors::AppError;
use crate::models::UserSession;
use crate::session::SessionStore;
use crate::AppState;

/// Run `op` against the session store on the blocking pool; the file backend
/// does synchronous disk I/O.
async fn run_blocking<T, F>(store: SessionStore, op: F) -> Result<T, AppError>
where
    F: FnOnce(&SessionStore) -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(|e| {
            tracing::error!("Session storage task failed: {}", e);
            AppError::Internal("Session storage task failed".to_string())
        })
}

/// GET /api/session - The persisted session, or null when signed out.
pub async fn get_session(State(state): State<AppState>) -> ApiResult<Option<UserSession>> {
    let session = run_blocking(state.session, |store| store.get_session()).await?;
    success(session)
}

/// DELETE /api/session - Log out.
pub async fn clear_session(State(state): State<AppState>) -> ApiResult<()> {
    run_blocking(state.session, |store| store.clear_session()).await?;
    success(())
}

/// GET /auth/callback - Persist the session delivered by the identity provider
/// and send the browser home.
pub async fn auth_callback(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let Some(params) = parse_callback_params(&query) else {
        tracing::warn!("Rejected auth callback with incomplete payload");
        return Err(AppError::Validation(INVALID_CALLBACK_MESSAGE.to_string()));
    };

    let session = params.into_session();
    run_blocking(state.session, move |store| store.set_session(&session)).await?;

    Ok(Redirect::to("/"))
}
