//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid debate mode: {0}")]
    InvalidMode(String),

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),

    #[error("Debate has already ended")]
    AlreadyFinished,

    #[error("Winner '{winner}' is not possible in a {mode} debate")]
    WinnerNotAllowed { winner: String, mode: String },

    #[error("Malformed verdict: {0}")]
    MalformedVerdict(String),

    #[error("Malformed topic: {0}")]
    MalformedTopic(String),
}

impl DomainError {
    /// Check if this error came from parsing model output
    pub fn is_malformed_output(&self) -> bool {
        matches!(
            self,
            DomainError::MalformedVerdict(_) | DomainError::MalformedTopic(_)
        )
    }
}
