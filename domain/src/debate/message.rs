//! Transcript messages and speaker roles

use super::entities::SessionId;
use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a transcript message.
///
/// `System` holds the topic briefing written when a session is created and
/// `Judge` holds the serialized verdict written when it ends. The remaining
/// roles are debaters; which of them may appear depends on the
/// [`DebateMode`](super::entities::DebateMode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    Human,
    Model,
    Agent1,
    Agent2,
    Judge,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::Human => "human",
            Role::Model => "model",
            Role::Agent1 => "agent1",
            Role::Agent2 => "agent2",
            Role::Judge => "judge",
        }
    }

    /// Check if this role takes part in the argument itself
    pub fn is_debater(&self) -> bool {
        match self {
            Role::Human | Role::Model | Role::Agent1 | Role::Agent2 => true,
            Role::System | Role::Judge => false,
        }
    }

    /// Check if this is one of the two model-vs-model agents
    pub fn is_agent(&self) -> bool {
        matches!(self, Role::Agent1 | Role::Agent2)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "system" => Ok(Role::System),
            "human" => Ok(Role::Human),
            "model" => Ok(Role::Model),
            "agent1" => Ok(Role::Agent1),
            "agent2" => Ok(Role::Agent2),
            "judge" => Ok(Role::Judge),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

/// A single transcript entry (Entity).
///
/// Messages are append-only: once the store hands one back it is never
/// modified. Transcript order is creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateMessage {
    pub id: i64,
    pub session_id: SessionId,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl DebateMessage {
    pub fn new(
        id: i64,
        session_id: SessionId,
        role: Role,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            session_id,
            role,
            content: content.into(),
            created_at,
        }
    }
}
