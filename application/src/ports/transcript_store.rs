//! Transcript store port
//!
//! Persistence of sessions, their messages and per-user stats. The store is
//! the only shared mutable state in the system: it is responsible for
//! serializing writes to one session and stats updates for one user.

use async_trait::async_trait;
use debate_domain::{
    DebateMessage, DebateSession, Role, Seating, SessionId, StatsDelta, UserId, UserStats,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// A session to be created; the store assigns id and creation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub owner: Option<UserId>,
    pub topic: String,
    pub seating: Seating,
}

#[async_trait]
pub trait TranscriptStore: Send + Sync {
    async fn create_session(&self, new: NewSession) -> Result<DebateSession, StoreError>;

    async fn get_session(&self, id: SessionId) -> Result<DebateSession, StoreError>;

    /// Replace the stored session with `session`
    async fn update_session(&self, session: &DebateSession) -> Result<(), StoreError>;

    /// Append a message to a session's transcript
    async fn append_message(
        &self,
        session_id: SessionId,
        role: Role,
        content: &str,
    ) -> Result<DebateMessage, StoreError>;

    /// All messages of a session in creation order
    async fn list_messages(&self, session_id: SessionId) -> Result<Vec<DebateMessage>, StoreError>;

    async fn get_stats(&self, user: UserId) -> Result<UserStats, StoreError>;

    /// Apply one outcome to a user's stats and return the new record.
    ///
    /// The read and the write happen under one lock, so concurrent outcomes
    /// for the same user are never lost.
    async fn apply_stats_delta(
        &self,
        user: UserId,
        delta: StatsDelta,
    ) -> Result<UserStats, StoreError>;

    /// Sessions owned by `user`, newest first
    async fn list_sessions_for_user(&self, user: UserId) -> Result<Vec<DebateSession>, StoreError>;
}
