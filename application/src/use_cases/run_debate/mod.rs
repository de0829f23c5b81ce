//! Run Debate use case
//!
//! [`DebateOrchestrator`] drives every debate operation:
//!
//! | Operation       | Mode           | Provider call          | Writes                          |
//! |-----------------|----------------|------------------------|---------------------------------|
//! | `create`        | both           | topic (if generated)   | session, briefing               |
//! | `exchange_turn` | human vs model | model reply            | human message, model message    |
//! | `advance_step`  | model vs model | next agent's turn      | agent message                   |
//! | `end`           | both           | judge (structured)     | session, judge message, stats   |
//!
//! The orchestrator keeps no state of its own between calls; everything is
//! read from and written to the [`TranscriptStore`].

mod create;
mod exchange;
mod judge;
mod query;
mod step;
#[cfg(test)]
pub(crate) mod test_support;
mod types;

pub use types::{
    CreateDebateInput, CreateDebateOutput, DebateDetail, DebateError, EndDebateOutput, ErrorKind,
    ExchangeOutput, StepOutput,
};

use crate::ports::completion::CompletionProvider;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger};
use crate::ports::transcript_store::TranscriptStore;
use debate_domain::SessionId;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Use case for running debates
pub struct DebateOrchestrator<P: CompletionProvider + 'static, S: TranscriptStore + 'static> {
    pub(super) provider: Arc<P>,
    pub(super) store: Arc<S>,
    pub(super) conversation_logger: Arc<dyn ConversationLogger>,
    pub(super) cancellation_token: Option<CancellationToken>,
}

impl<P, S> Clone for DebateOrchestrator<P, S>
where
    P: CompletionProvider + 'static,
    S: TranscriptStore + 'static,
{
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            store: self.store.clone(),
            conversation_logger: self.conversation_logger.clone(),
            cancellation_token: self.cancellation_token.clone(),
        }
    }
}

impl<P: CompletionProvider + 'static, S: TranscriptStore + 'static> DebateOrchestrator<P, S> {
    pub fn new(provider: Arc<P>, store: Arc<S>) -> Self {
        Self {
            provider,
            store,
            conversation_logger: Arc::new(NoConversationLogger),
            cancellation_token: None,
        }
    }

    /// Record debate events to a conversation log
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Set a cancellation token that aborts in-flight provider calls
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    fn log_provider_failure(&self, session_id: Option<SessionId>, operation: &str, err: &DebateError) {
        if matches!(err, DebateError::Provider(_)) {
            self.conversation_logger.log(ConversationEvent::new(
                "provider_failed",
                serde_json::json!({
                    "session_id": session_id.map(|id| id.0),
                    "operation": operation,
                    "error": err.to_string(),
                }),
            ));
        }
    }
}
