//! Debate event logging.
//!
//! Provides [`JsonlConversationLogger`], which implements the
//! [`ConversationLogger`](debate_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
