//! Progress notification port
//!
//! Defines the interface for reporting progress while a debate operation
//! waits on the completion provider.

use debate_domain::{DebateMessage, Role};

/// What a provider call is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderCall {
    TopicGeneration,
    Turn(Role),
    Judging,
}

impl ProviderCall {
    pub fn description(&self) -> String {
        match self {
            ProviderCall::TopicGeneration => "Generating a topic".to_string(),
            ProviderCall::Turn(role) => format!("Waiting for {}", role),
            ProviderCall::Judging => "Judging the debate".to_string(),
        }
    }
}

/// Callback for progress updates during debate operations
///
/// Implementations live in the presentation layer.
pub trait DebateProgressNotifier: Send + Sync {
    /// Called before a provider call is made
    fn on_provider_call_start(&self, call: ProviderCall);

    /// Called when a provider call returns, successfully or not
    fn on_provider_call_end(&self, call: ProviderCall, success: bool);

    /// Called after a message has been appended to the transcript
    fn on_message_appended(&self, _message: &DebateMessage) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoDebateProgress;

impl DebateProgressNotifier for NoDebateProgress {
    fn on_provider_call_start(&self, _call: ProviderCall) {}
    fn on_provider_call_end(&self, _call: ProviderCall, _success: bool) {}
}
