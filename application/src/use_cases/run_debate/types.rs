//! Type definitions for the debate orchestrator.

use crate::ports::completion::ProviderError;
use crate::ports::transcript_store::StoreError;
use debate_domain::{
    DebateMessage, DebateMode, DebateSession, DomainError, PositionChoice, TopicBrief, UserId,
    Verdict,
};
use std::fmt;
use thiserror::Error;

/// Errors that can occur during debate operations
#[derive(Error, Debug)]
pub enum DebateError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Operation cancelled")]
    Cancelled,
}

/// Stable, caller-facing classification of a [`DebateError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidState,
    Validation,
    Provider,
    Persistence,
    Cancelled,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidState => "invalid_state",
            ErrorKind::Validation => "validation_error",
            ErrorKind::Provider => "provider_error",
            ErrorKind::Persistence => "persistence_error",
            ErrorKind::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DebateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DebateError::NotFound(_) => ErrorKind::NotFound,
            DebateError::InvalidState(_) => ErrorKind::InvalidState,
            DebateError::Validation(_) => ErrorKind::Validation,
            DebateError::Provider(_) => ErrorKind::Provider,
            DebateError::Persistence(_) => ErrorKind::Persistence,
            DebateError::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DebateError::Cancelled)
    }

    /// Wrap any store failure as a persistence error, `NotFound` included
    pub(super) fn persistence(err: StoreError) -> Self {
        DebateError::Persistence(err.to_string())
    }
}

impl From<StoreError> for DebateError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => DebateError::NotFound(what),
            StoreError::Backend(msg) => DebateError::Persistence(msg),
        }
    }
}

impl From<DomainError> for DebateError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidMode(_)
            | DomainError::InvalidPosition(_)
            | DomainError::InvalidRole(_)
            | DomainError::InvalidOutputFormat(_) => DebateError::Validation(err.to_string()),
            DomainError::AlreadyFinished | DomainError::WinnerNotAllowed { .. } => {
                DebateError::InvalidState(err.to_string())
            }
            DomainError::MalformedVerdict(msg) | DomainError::MalformedTopic(msg) => {
                DebateError::Provider(ProviderError::MalformedOutput(msg))
            }
        }
    }
}

/// Input for creating a debate
#[derive(Debug, Clone)]
pub struct CreateDebateInput {
    /// Requesting user; ignored for model-vs-model debates
    pub owner: Option<UserId>,
    pub mode: DebateMode,
    /// Motion to debate; a topic is generated when absent or blank
    pub topic: Option<String>,
    /// Side the human argues in human-vs-model debates
    pub position: PositionChoice,
    pub randomize_topic: bool,
    pub randomize_position: bool,
}

impl CreateDebateInput {
    pub fn new(mode: DebateMode) -> Self {
        Self {
            owner: None,
            mode,
            topic: None,
            position: PositionChoice::Random,
            randomize_topic: false,
            randomize_position: false,
        }
    }

    pub fn with_owner(mut self, owner: UserId) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<PositionChoice>) -> Self {
        self.position = position.into();
        self
    }

    pub fn randomize_topic(mut self) -> Self {
        self.randomize_topic = true;
        self
    }

    pub fn randomize_position(mut self) -> Self {
        self.randomize_position = true;
        self
    }

    /// The caller-supplied topic, if one should be used as-is
    pub(super) fn fixed_topic(&self) -> Option<&str> {
        if self.randomize_topic {
            return None;
        }
        self.topic
            .as_deref()
            .map(str::trim)
            .filter(|topic| !topic.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct CreateDebateOutput {
    pub session: DebateSession,
    /// Present when the topic was generated
    pub topic_brief: Option<TopicBrief>,
}

#[derive(Debug, Clone)]
pub struct ExchangeOutput {
    pub human_message: DebateMessage,
    pub model_message: DebateMessage,
}

/// Result of one model-vs-model step
#[derive(Debug, Clone)]
pub struct StepOutput {
    /// The agent message produced, `None` when there was nothing left to do
    pub message: Option<DebateMessage>,
    /// Both agents have used all their turns
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct EndDebateOutput {
    pub session: DebateSession,
    pub verdict: Verdict,
}

#[derive(Debug, Clone)]
pub struct DebateDetail {
    pub session: DebateSession,
    pub messages: Vec<DebateMessage>,
}
