//! Model-vs-model stepping.

use super::{DebateError, DebateOrchestrator, StepOutput};
use crate::ports::completion::CompletionProvider;
use crate::ports::progress::{DebateProgressNotifier, NoDebateProgress, ProviderCall};
use crate::ports::transcript_store::TranscriptStore;
use crate::use_cases::shared::complete_cancellable;
use debate_domain::{DebateMode, SessionId, TurnDecision, TurnScheduler, assemble_debater_prompt};
use tracing::{debug, info};

impl<P: CompletionProvider + 'static, S: TranscriptStore + 'static> DebateOrchestrator<P, S> {
    /// Produce the next agent turn
    pub async fn advance_step(&self, session_id: SessionId) -> Result<StepOutput, DebateError> {
        self.advance_step_with_progress(session_id, &NoDebateProgress)
            .await
    }

    /// Produce the next agent turn, with progress callbacks.
    ///
    /// Whose turn it is comes from the transcript as stored right now. A
    /// finished session or a complete transcript yields no message and
    /// `finished = true`.
    pub async fn advance_step_with_progress(
        &self,
        session_id: SessionId,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<StepOutput, DebateError> {
        let session = self.store.get_session(session_id).await?;
        if session.mode() != DebateMode::ModelVsModel {
            return Err(DebateError::InvalidState(format!(
                "session {} is not a model-vs-model debate",
                session_id
            )));
        }
        if !session.is_active() {
            return Ok(StepOutput {
                message: None,
                finished: true,
            });
        }

        let transcript = self.store.list_messages(session_id).await?;
        let (role, finishes_debate) = match TurnScheduler::next_turn(&transcript) {
            TurnDecision::Complete => {
                debug!(session_id = %session_id, "All turns taken");
                return Ok(StepOutput {
                    message: None,
                    finished: true,
                });
            }
            TurnDecision::Speak {
                role,
                finishes_debate,
            } => (role, finishes_debate),
        };
        let seat = session.seating().seat_for(role).ok_or_else(|| {
            DebateError::InvalidState(format!("{} has no seat in session {}", role, session_id))
        })?;

        let prompt = assemble_debater_prompt(&session, &transcript, &seat);
        let reply = complete_cancellable(
            self.provider.as_ref(),
            &prompt,
            None,
            ProviderCall::Turn(role),
            progress,
            &self.cancellation_token,
        )
        .await
        .inspect_err(|err| self.log_provider_failure(Some(session_id), "advance_step", err))?;

        let message = self
            .store
            .append_message(session_id, role, &reply)
            .await
            .map_err(DebateError::persistence)?;
        progress.on_message_appended(&message);
        self.log_turn(&message);

        info!(
            session_id = %session_id,
            role = %role,
            finished = finishes_debate,
            "Step completed"
        );
        Ok(StepOutput {
            message: Some(message),
            finished: finishes_debate,
        })
    }
}
