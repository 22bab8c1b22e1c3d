//! In-memory chat sessions and their messages.

use std::collections::HashMap;

use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Attachment, ChatMessage, ChatSession, MessageRole};

/// Chat sessions keyed by id, each with its messages in posting order.
#[derive(Debug, Default)]
pub struct ChatRepository {
    sessions: HashMap<Uuid, ChatSession>,
    messages: HashMap<Uuid, Vec<ChatMessage>>,
}

impl ChatRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_session(&mut self, user_id: Option<Uuid>) -> ChatSession {
        let session = ChatSession::new(user_id);
        self.sessions.insert(session.id, session.clone());
        self.messages.entry(session.id).or_default();
        tracing::debug!(session_id = %session.id, "Chat session opened");
        session
    }

    pub fn get_session(&self, session_id: Uuid) -> Option<&ChatSession> {
        self.sessions.get(&session_id)
    }

    pub fn add_message(
        &mut self,
        session_id: Uuid,
        role: MessageRole,
        content: String,
        attachments: Vec<Attachment>,
    ) -> Result<ChatMessage, AppError> {
        if !self.sessions.contains_key(&session_id) {
            return Err(AppError::NotFound(format!(
                "Session {} not found",
                session_id
            )));
        }

        let message = ChatMessage::new(session_id, role, content, attachments);
        self.messages
            .entry(session_id)
            .or_default()
            .push(message.clone());
        Ok(message)
    }

    pub fn list_messages(&self, session_id: Uuid) -> Vec<ChatMessage> {
        self.messages.get(&session_id).cloned().unwrap_or_default()
    }
}
