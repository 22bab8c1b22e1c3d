//! Persisted user session.
//!
//! The session lives under a single storage key as JSON. Anything stored there
//! that does not have the exact session shape is treated as "signed out" and
//! removed on read. Storage failures never escape this module: reads report
//! no session and writes are dropped, with a warning in the log.

use std::sync::Arc;

use serde_json::Value;

use crate::models::{AuthProvider, UserSession};
use crate::storage::{KeyValueStore, StorageError};

/// Storage key holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "aijurisdiction.auth.session";

/// Reads and writes the signed-in user's session.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Load the persisted session, deleting it if it is malformed.
    pub fn get_session(&self) -> Option<UserSession> {
        let raw = match self.storage.get(SESSION_STORAGE_KEY) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return None,
            Err(StorageError::Corrupt(e)) => {
                tracing::warn!("Discarding unreadable persisted session: {}", e);
                self.remove_entry();
                return None;
            }
            Err(e) => {
                tracing::warn!("Session storage read failed: {}", e);
                return None;
            }
        };

        match parse_session(&raw) {
            Some(session) => Some(session),
            None => {
                tracing::warn!("Discarding malformed persisted session");
                self.remove_entry();
                None
            }
        }
    }

    /// Persist `session`, replacing whatever was stored.
    pub fn set_session(&self, session: &UserSession) {
        let json = match serde_json::to_string(session) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize session: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set(SESSION_STORAGE_KEY, &json) {
            tracing::warn!("Session storage write failed: {}", e);
            return;
        }

        tracing::info!(
            user_id = %session.id,
            provider = session.provider.as_str(),
            "Session stored"
        );
    }

    /// Forget the persisted session. Safe to call when signed out.
    pub fn clear_session(&self) {
        self.remove_entry();
    }

    fn remove_entry(&self) {
        if let Err(e) = self.storage.remove(SESSION_STORAGE_KEY) {
            tracing::warn!("Session storage delete failed: {}", e);
        }
    }
}

/// Strict shape check: `id`, `name`, `provider` strings, a known provider and
/// `avatarUrl` either missing or a string. Extra fields are allowed.
fn parse_session(raw: &str) -> Option<UserSession> {
    let value: Value = serde_json::from_str(raw).ok()?;
    let object = value.as_object()?;

    let id = object.get("id")?.as_str()?;
    let name = object.get("name")?.as_str()?;
    let provider = AuthProvider::parse(object.get("provider")?.as_str()?)?;

    let avatar_url = match object.get("avatarUrl") {
        None => None,
        Some(Value::String(url)) => Some(url.clone()),
        Some(_) => return None,
    };

    Some(UserSession {
        id: id.to_string(),
        name: name.to_string(),
        provider,
        avatar_url,
    })
}
