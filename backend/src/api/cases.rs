//! Case workspace API endpoints.
//!
//! The store ignores operations on unknown cases; these handlers report them
//! as 404 so API clients can tell nothing happened.

use axum::extract::{Path, State};

use super::{success, ApiJson, ApiResult};
use crate::errors::AppError;
use crate::models::{
    AddInteractionRequest, CaseInteraction, CaseRecord, CaseSnapshot, CaseUpdate,
    SetActiveCaseRequest, SetCaseModeRequest, SetCaseRoleRequest,
};
use crate::AppState;

fn case_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Case {} not found", id))
}

/// GET /api/cases - All cases plus the active-case pointer.
pub async fn list_cases(State(state): State<AppState>) -> ApiResult<CaseSnapshot> {
    success(state.cases.read().await.snapshot())
}

/// POST /api/cases - Create a blank case and make it active.
pub async fn create_case(State(state): State<AppState>) -> ApiResult<CaseRecord> {
    let created = state.cases.write().await.create_case();
    success(created)
}

/// GET /api/cases/active - The resolved active case, or null when there are none.
pub async fn get_active_case(State(state): State<AppState>) -> ApiResult<Option<CaseRecord>> {
    success(state.cases.read().await.active_case().cloned())
}

/// PUT /api/cases/active - Move the active-case pointer. Unknown ids are
/// accepted; the snapshot shows what they resolve to.
pub async fn set_active_case(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SetActiveCaseRequest>,
) -> ApiResult<CaseSnapshot> {
    let mut cases = state.cases.write().await;
    cases.set_active_case(request.case_id);
    success(cases.snapshot())
}

/// GET /api/cases/:id - Get a single case.
pub async fn get_case(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<CaseRecord> {
    let cases = state.cases.read().await;
    match cases.get_case(&id) {
        Some(case) => success(case.clone()),
        None => Err(case_not_found(&id)),
    }
}

/// PATCH /api/cases/:id - Merge fields into a case.
pub async fn update_case(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(update): ApiJson<CaseUpdate>,
) -> ApiResult<CaseRecord> {
    let mut cases = state.cases.write().await;
    let updated = cases
        .update_case(&id, update)
        .cloned()
        .ok_or_else(|| case_not_found(&id))?;
    success(updated)
}

/// PUT /api/cases/:id/role - Change the role the assistant acts in.
pub async fn set_case_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<SetCaseRoleRequest>,
) -> ApiResult<CaseRecord> {
    let mut cases = state.cases.write().await;
    let updated = cases
        .set_case_role(&id, request.role)
        .cloned()
        .ok_or_else(|| case_not_found(&id))?;
    success(updated)
}

/// PUT /api/cases/:id/mode - Change the workspace mode.
pub async fn set_case_mode(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<SetCaseModeRequest>,
) -> ApiResult<CaseRecord> {
    let mut cases = state.cases.write().await;
    let updated = cases
        .set_case_mode(&id, request.mode)
        .cloned()
        .ok_or_else(|| case_not_found(&id))?;
    success(updated)
}

/// POST /api/cases/:id/interactions - Append to a case's interaction log.
pub async fn add_interaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<AddInteractionRequest>,
) -> ApiResult<CaseInteraction> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }

    let mut cases = state.cases.write().await;
    let entry = cases
        .add_interaction(&id, &request.actor, &request.message)
        .ok_or_else(|| case_not_found(&id))?;
    success(entry)
}
