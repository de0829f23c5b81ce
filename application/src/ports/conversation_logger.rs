//! Port for structured debate logging.
//!
//! [`ConversationLogger`] records debate events (session creation, each
//! turn, verdicts, provider failures) as machine-readable records. This is
//! separate from `tracing`: tracing carries operational diagnostics, this
//! port carries the debate itself.

use serde_json::Value;

/// A structured debate event.
///
/// The logger adds the timestamp when it writes the record.
pub struct ConversationEvent {
    /// Event type, e.g. "debate_created", "turn_completed", "debate_judged"
    pub event_type: &'static str,
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Sink for debate events.
///
/// `log` is synchronous and infallible; a failed write must never fail the
/// debate operation that produced the event.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Logger used when no conversation log is configured
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
