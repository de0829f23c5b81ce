//! Human-vs-model exchange: one human message, one model reply.

use super::{DebateError, DebateOrchestrator, ExchangeOutput};
use crate::ports::completion::CompletionProvider;
use crate::ports::conversation_logger::ConversationEvent;
use crate::ports::progress::{DebateProgressNotifier, NoDebateProgress, ProviderCall};
use crate::ports::transcript_store::TranscriptStore;
use crate::use_cases::shared::complete_cancellable;
use debate_domain::{DebateMessage, DebateMode, Role, SessionId, assemble_debater_prompt};
use tracing::{debug, info};

impl<P: CompletionProvider + 'static, S: TranscriptStore + 'static> DebateOrchestrator<P, S> {
    /// Submit a human message and get the model's reply
    pub async fn exchange_turn(
        &self,
        session_id: SessionId,
        text: &str,
    ) -> Result<ExchangeOutput, DebateError> {
        self.exchange_turn_with_progress(session_id, text, &NoDebateProgress)
            .await
    }

    /// Submit a human message and get the model's reply, with progress callbacks.
    ///
    /// The human message is stored before the provider is called, so it
    /// survives a failed or cancelled reply.
    pub async fn exchange_turn_with_progress(
        &self,
        session_id: SessionId,
        text: &str,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<ExchangeOutput, DebateError> {
        if text.trim().is_empty() {
            return Err(DebateError::Validation("message text is empty".to_string()));
        }

        let session = self.store.get_session(session_id).await?;
        if session.mode() != DebateMode::HumanVsModel {
            return Err(DebateError::InvalidState(format!(
                "session {} is not a human-vs-model debate",
                session_id
            )));
        }
        if !session.is_active() {
            return Err(DebateError::InvalidState(format!(
                "session {} has already ended",
                session_id
            )));
        }
        let seat = session.seating().seat_for(Role::Model).ok_or_else(|| {
            DebateError::InvalidState(format!("session {} has no model seat", session_id))
        })?;

        let human_message = self
            .store
            .append_message(session_id, Role::Human, text)
            .await
            .map_err(DebateError::persistence)?;
        progress.on_message_appended(&human_message);
        self.log_turn(&human_message);

        let transcript = self.store.list_messages(session_id).await?;
        let prompt = assemble_debater_prompt(&session, &transcript, &seat);
        debug!(session_id = %session_id, prompt_messages = prompt.len(), "Requesting model reply");

        let reply = complete_cancellable(
            self.provider.as_ref(),
            &prompt,
            None,
            ProviderCall::Turn(Role::Model),
            progress,
            &self.cancellation_token,
        )
        .await
        .inspect_err(|err| self.log_provider_failure(Some(session_id), "exchange_turn", err))?;

        let model_message = self
            .store
            .append_message(session_id, Role::Model, &reply)
            .await
            .map_err(DebateError::persistence)?;
        progress.on_message_appended(&model_message);
        self.log_turn(&model_message);

        info!(session_id = %session_id, "Exchange completed");
        Ok(ExchangeOutput {
            human_message,
            model_message,
        })
    }

    pub(super) fn log_turn(&self, message: &DebateMessage) {
        self.conversation_logger.log(ConversationEvent::new(
            "turn_completed",
            serde_json::json!({
                "session_id": message.session_id.0,
                "message_id": message.id,
                "role": message.role.as_str(),
                "content": message.content,
            }),
        ));
    }
}
