//! In-memory transcript store
//!
//! All state lives behind one async mutex, so writes to a session and stats
//! updates for a user are serialized. A stats update reads and writes the
//! record under the same lock. Ids increase monotonically from 1.

use async_trait::async_trait;
use chrono::Utc;
use debate_application::ports::transcript_store::{NewSession, StoreError, TranscriptStore};
use debate_domain::{DebateMessage, DebateSession, Role, SessionId, StatsDelta, UserId, UserStats};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Default)]
struct Tables {
    sessions: Vec<DebateSession>,
    messages: HashMap<SessionId, Vec<DebateMessage>>,
    stats: HashMap<UserId, UserStats>,
    last_session_id: i64,
    last_message_id: i64,
}

#[derive(Default)]
pub struct InMemoryTranscriptStore {
    tables: Mutex<Tables>,
}

impl InMemoryTranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user with zeroed stats; an existing record is kept.
    pub async fn register_user(&self, user: UserId) -> UserStats {
        let mut tables = self.tables.lock().await;
        tables
            .stats
            .entry(user)
            .or_insert_with(|| UserStats::new(user))
            .clone()
    }
}

fn session_not_found(id: SessionId) -> StoreError {
    StoreError::NotFound(format!("session {}", id))
}

#[async_trait]
impl TranscriptStore for InMemoryTranscriptStore {
    async fn create_session(&self, new: NewSession) -> Result<DebateSession, StoreError> {
        let mut tables = self.tables.lock().await;
        tables.last_session_id += 1;
        let id = SessionId(tables.last_session_id);
        let session = DebateSession::new(id, new.owner, new.topic, new.seating, Utc::now());
        tables.sessions.push(session.clone());
        tables.messages.insert(id, Vec::new());
        debug!(session_id = %id, "Session stored");
        Ok(session)
    }

    async fn get_session(&self, id: SessionId) -> Result<DebateSession, StoreError> {
        let tables = self.tables.lock().await;
        tables
            .sessions
            .iter()
            .find(|s| s.id() == id)
            .cloned()
            .ok_or_else(|| session_not_found(id))
    }

    async fn update_session(&self, session: &DebateSession) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        let slot = tables
            .sessions
            .iter_mut()
            .find(|s| s.id() == session.id())
            .ok_or_else(|| session_not_found(session.id()))?;
        *slot = session.clone();
        Ok(())
    }

    async fn append_message(
        &self,
        session_id: SessionId,
        role: Role,
        content: &str,
    ) -> Result<DebateMessage, StoreError> {
        let mut tables = self.tables.lock().await;
        if !tables.messages.contains_key(&session_id) {
            return Err(session_not_found(session_id));
        }
        tables.last_message_id += 1;
        let message = DebateMessage::new(
            tables.last_message_id,
            session_id,
            role,
            content,
            Utc::now(),
        );
        tables
            .messages
            .entry(session_id)
            .or_default()
            .push(message.clone());
        Ok(message)
    }

    async fn list_messages(&self, session_id: SessionId) -> Result<Vec<DebateMessage>, StoreError> {
        let tables = self.tables.lock().await;
        tables
            .messages
            .get(&session_id)
            .cloned()
            .ok_or_else(|| session_not_found(session_id))
    }

    async fn get_stats(&self, user: UserId) -> Result<UserStats, StoreError> {
        let tables = self.tables.lock().await;
        tables
            .stats
            .get(&user)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("user {}", user)))
    }

    async fn apply_stats_delta(
        &self,
        user: UserId,
        delta: StatsDelta,
    ) -> Result<UserStats, StoreError> {
        let mut tables = self.tables.lock().await;
        let stats = tables
            .stats
            .get_mut(&user)
            .ok_or_else(|| StoreError::NotFound(format!("user {}", user)))?;
        stats.apply(delta);
        debug!(user_id = %user, total_debates = stats.total_debates, "Updated stats");
        Ok(stats.clone())
    }

    async fn list_sessions_for_user(&self, user: UserId) -> Result<Vec<DebateSession>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .sessions
            .iter()
            .rev()
            .filter(|s| s.owner() == Some(user))
            .cloned()
            .collect())
    }
}
