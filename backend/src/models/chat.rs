//! Chat session and message models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a chat session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChatSessionState {
    #[default]
    Active,
    Completed,
    Stopped,
    Failed,
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// File attached to a chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: Uuid,
    pub filename: String,
    pub content_type: String,
}

/// A conversation with the assistant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub state: ChatSessionState,
    pub created_at: DateTime<Utc>,
}

impl ChatSession {
    pub fn new(user_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            state: ChatSessionState::Active,
            created_at: Utc::now(),
        }
    }
}

/// One message inside a chat session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub session_id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl ChatMessage {
    pub fn new(
        session_id: Uuid,
        role: MessageRole,
        content: String,
        attachments: Vec<Attachment>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            session_id,
            role,
            content,
            created_at: Utc::now(),
            attachments,
        }
    }
}

/// Request body for opening a chat session.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatSessionRequest {
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

/// Request body for posting a chat message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatMessageRequest {
    pub session_id: Uuid,
    pub role: MessageRole,
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}
