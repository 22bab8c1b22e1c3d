//! Chat API endpoints.

use axum::extract::{Path, State};
use uuid::Uuid;

use super::{success, ApiJson, ApiResult};
use crate::errors::AppError;
use crate::models::{ChatMessage, ChatSession, CreateChatMessageRequest, CreateChatSessionRequest};
use crate::AppState;

/// POST /v1/chat/sessions - Open a chat session.
pub async fn create_chat_session(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateChatSessionRequest>,
) -> ApiResult<ChatSession> {
    let session = state.chat.write().await.create_session(request.user_id);
    success(session)
}

/// POST /v1/chat/messages - Post a message to an existing session.
pub async fn create_chat_message(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateChatMessageRequest>,
) -> ApiResult<ChatMessage> {
    let message = state.chat.write().await.add_message(
        request.session_id,
        request.role,
        request.content,
        request.attachments,
    )?;
    success(message)
}

/// GET /v1/chat/sessions/:id/messages - Messages of a session in posting order.
pub async fn list_chat_messages(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Vec<ChatMessage>> {
    let chat = state.chat.read().await;

    if chat.get_session(session_id).is_none() {
        return Err(AppError::NotFound(format!(
            "Session {} not found",
            session_id
        )));
    }

    success(chat.list_messages(session_id))
}
