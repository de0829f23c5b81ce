//! Session creation: topic, seating and briefing.

use super::{CreateDebateInput, CreateDebateOutput, DebateError, DebateOrchestrator};
use crate::ports::completion::CompletionProvider;
use crate::ports::conversation_logger::ConversationEvent;
use crate::ports::progress::{DebateProgressNotifier, NoDebateProgress, ProviderCall};
use crate::ports::transcript_store::{NewSession, TranscriptStore};
use crate::use_cases::shared::complete_cancellable;
use debate_domain::{
    DebateMode, DebatePromptTemplate, Position, Role, Seating, TopicBrief, assemble_topic_prompt,
    topic_schema,
};
use tracing::{debug, info};

impl<P: CompletionProvider + 'static, S: TranscriptStore + 'static> DebateOrchestrator<P, S> {
    /// Create a debate session
    pub async fn create(&self, input: CreateDebateInput) -> Result<CreateDebateOutput, DebateError> {
        self.create_with_progress(input, &NoDebateProgress).await
    }

    /// Create a debate session with progress callbacks.
    ///
    /// A topic is generated when none (or a blank one) is given or when
    /// randomization is requested; a failed generation aborts creation.
    /// The briefing is always the session's first message.
    pub async fn create_with_progress(
        &self,
        input: CreateDebateInput,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<CreateDebateOutput, DebateError> {
        let (topic, topic_brief) = match input.fixed_topic() {
            Some(topic) => (topic.to_string(), None),
            None => {
                let brief = self.generate_topic(progress).await?;
                (brief.topic.clone(), Some(brief))
            }
        };

        let seating = match input.mode {
            DebateMode::HumanVsModel => Seating::HumanVsModel {
                human: Self::human_position(&input),
            },
            DebateMode::ModelVsModel => Seating::ModelVsModel,
        };

        let session = self
            .store
            .create_session(NewSession {
                owner: input.owner,
                topic: topic.clone(),
                seating,
            })
            .await
            .map_err(DebateError::persistence)?;

        let briefing = DebatePromptTemplate::briefing(&topic, topic_brief.as_ref());
        let briefing = self
            .store
            .append_message(session.id(), Role::System, &briefing)
            .await
            .map_err(DebateError::persistence)?;
        progress.on_message_appended(&briefing);

        info!(
            session_id = %session.id(),
            mode = %session.mode(),
            generated_topic = topic_brief.is_some(),
            "Debate created"
        );
        self.conversation_logger.log(ConversationEvent::new(
            "debate_created",
            serde_json::json!({
                "session_id": session.id().0,
                "mode": session.mode().as_str(),
                "topic": session.topic(),
                "human_position": session.seating().human_position().map(|p| p.as_str()),
                "owner": session.owner().map(|u| u.0),
            }),
        ));

        Ok(CreateDebateOutput {
            session,
            topic_brief,
        })
    }

    async fn generate_topic(
        &self,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<TopicBrief, DebateError> {
        debug!("Generating debate topic");
        let result: Result<TopicBrief, DebateError> = async {
            let raw = complete_cancellable(
                self.provider.as_ref(),
                &assemble_topic_prompt(),
                Some(&topic_schema()),
                ProviderCall::TopicGeneration,
                progress,
                &self.cancellation_token,
            )
            .await?;
            Ok(TopicBrief::parse(&raw)?)
        }
        .await;

        if let Err(err) = &result {
            self.log_provider_failure(None, "generate_topic", err);
        }
        result
    }

    fn human_position(input: &CreateDebateInput) -> Position {
        let fixed = if input.randomize_position {
            None
        } else {
            input.position.fixed()
        };
        fixed.unwrap_or_else(|| {
            if rand::random::<bool>() {
                Position::Pro
            } else {
                Position::Con
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{MockStore, ScriptedProvider, topic_json};
    use super::*;
    use crate::ports::completion::ProviderError;
    use crate::use_cases::run_debate::ErrorKind;
    use debate_domain::{PositionChoice, SessionStatus, UserId};
    use std::sync::Arc;

    fn orchestrator(
        provider: ScriptedProvider,
    ) -> (DebateOrchestrator<ScriptedProvider, MockStore>, Arc<ScriptedProvider>, Arc<MockStore>) {
        let provider = Arc::new(provider);
        let store = Arc::new(MockStore::new());
        (
            DebateOrchestrator::new(provider.clone(), store.clone()),
            provider,
            store,
        )
    }

    #[tokio::test]
    async fn test_create_human_debate_with_fixed_side() {
        let (orchestrator, provider, store) = orchestrator(ScriptedProvider::new(vec![]));

        let output = orchestrator
            .create(
                CreateDebateInput::new(DebateMode::HumanVsModel)
                    .with_owner(UserId(1))
                    .with_topic("X")
                    .with_position(Position::Pro),
            )
            .await
            .unwrap();

        let session = output.session;
        assert_eq!(session.status(), SessionStatus::Active);
        assert_eq!(session.topic(), "X");
        assert_eq!(session.seating().human_position(), Some(Position::Pro));
        assert_eq!(session.seating().model_position(), Some(Position::Con));
        assert_eq!(session.owner(), Some(UserId(1)));
        assert!(output.topic_brief.is_none());
        assert_eq!(provider.call_count(), 0);

        let messages = store.messages(session.id());
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("X"));
    }

    #[tokio::test]
    async fn test_create_generates_topic_when_blank() {
        let (orchestrator, provider, store) =
            orchestrator(ScriptedProvider::new(vec![Ok(topic_json("Ban homework"))]));

        let output = orchestrator
            .create(CreateDebateInput::new(DebateMode::ModelVsModel).with_topic("  "))
            .await
            .unwrap();

        assert_eq!(output.session.topic(), "Ban homework");
        let brief = output.topic_brief.unwrap();
        assert_eq!(brief.topic, "Ban homework");
        assert_eq!(provider.calls()[0].schema.as_deref(), Some("debate_topic"));

        let briefing = &store.messages(output.session.id())[0];
        assert!(briefing.content.contains("Pro position:"));
        assert!(briefing.content.contains("Background:"));
    }

    #[tokio::test]
    async fn test_randomize_topic_overrides_given_topic() {
        let (orchestrator, _, _) =
            orchestrator(ScriptedProvider::new(vec![Ok(topic_json("Generated"))]));

        let output = orchestrator
            .create(
                CreateDebateInput::new(DebateMode::HumanVsModel)
                    .with_topic("Given")
                    .randomize_topic(),
            )
            .await
            .unwrap();

        assert_eq!(output.session.topic(), "Generated");
    }

    #[tokio::test]
    async fn test_topic_failure_aborts_creation() {
        let (orchestrator, _, store) = orchestrator(ScriptedProvider::new(vec![Err(
            ProviderError::RequestFailed("offline".to_string()),
        )]));

        let err = orchestrator
            .create(CreateDebateInput::new(DebateMode::HumanVsModel))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Provider);
        assert_eq!(store.session_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_topic_is_provider_error() {
        let (orchestrator, _, store) =
            orchestrator(ScriptedProvider::new(vec![Ok("not json".to_string())]));

        let err = orchestrator
            .create(CreateDebateInput::new(DebateMode::ModelVsModel))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Provider);
        assert_eq!(store.session_count(), 0);
    }

    #[tokio::test]
    async fn test_random_position_assigns_a_side() {
        let (orchestrator, _, _) = orchestrator(ScriptedProvider::new(vec![]));

        for choice in [PositionChoice::Random, PositionChoice::Con] {
            let output = orchestrator
                .create(
                    CreateDebateInput::new(DebateMode::HumanVsModel)
                        .with_topic("X")
                        .with_position(choice)
                        .randomize_position(),
                )
                .await
                .unwrap();
            let human = output.session.seating().human_position().unwrap();
            let model = output.session.seating().model_position().unwrap();
            assert_eq!(human.opposite(), model);
        }
    }

    #[tokio::test]
    async fn test_model_debate_drops_owner() {
        let (orchestrator, _, _) = orchestrator(ScriptedProvider::new(vec![]));

        let output = orchestrator
            .create(
                CreateDebateInput::new(DebateMode::ModelVsModel)
                    .with_owner(UserId(4))
                    .with_topic("X"),
            )
            .await
            .unwrap();

        assert_eq!(output.session.owner(), None);
        assert_eq!(output.session.seating(), &Seating::ModelVsModel);
    }
}
