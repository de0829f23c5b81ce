//! Application layer for llm-debate
//!
//! This crate contains the debate orchestrator use case and the ports it
//! drives. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    completion::{CompletionProvider, ProviderError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{DebateProgressNotifier, NoDebateProgress, ProviderCall},
    transcript_store::{NewSession, StoreError, TranscriptStore},
};
pub use use_cases::run_debate::{
    CreateDebateInput, CreateDebateOutput, DebateDetail, DebateError, DebateOrchestrator,
    EndDebateOutput, ErrorKind, ExchangeOutput, StepOutput,
};
