//! Ending a debate: judging, winner mapping and the commit set.

use super::{DebateError, DebateOrchestrator, EndDebateOutput};
use crate::ports::completion::CompletionProvider;
use crate::ports::conversation_logger::ConversationEvent;
use crate::ports::progress::{DebateProgressNotifier, NoDebateProgress, ProviderCall};
use crate::ports::transcript_store::TranscriptStore;
use crate::use_cases::shared::complete_cancellable;
use chrono::Utc;
use debate_domain::{
    ChatMessage, Role, SessionId, StatsDelta, UserId, Verdict, assemble_judge_prompt,
    map_verdict, verdict_schema,
};
use tracing::{debug, info, warn};

impl<P: CompletionProvider + 'static, S: TranscriptStore + 'static> DebateOrchestrator<P, S> {
    /// Judge and finish a debate
    pub async fn end(&self, session_id: SessionId) -> Result<EndDebateOutput, DebateError> {
        self.end_with_progress(session_id, &NoDebateProgress).await
    }

    /// Judge and finish a debate, with progress callbacks.
    ///
    /// Nothing is written until a well-formed verdict is in hand. The session
    /// update must succeed; the judge message and the owner's stats are
    /// written after it and their failures are only logged.
    pub async fn end_with_progress(
        &self,
        session_id: SessionId,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<EndDebateOutput, DebateError> {
        let mut session = self.store.get_session(session_id).await?;
        if !session.is_active() {
            return Err(DebateError::InvalidState(format!(
                "session {} has already ended",
                session_id
            )));
        }

        let transcript = self.store.list_messages(session_id).await?;
        let verdict = self
            .request_verdict(session_id, &assemble_judge_prompt(&session, &transcript), progress)
            .await?;

        let outcome = map_verdict(session.seating(), verdict.winner);
        session.finish(outcome.winner, verdict.final_comment.clone(), Utc::now())?;
        self.store
            .update_session(&session)
            .await
            .map_err(DebateError::persistence)?;

        match verdict.to_json() {
            Ok(serialized) => match self
                .store
                .append_message(session_id, Role::Judge, &serialized)
                .await
            {
                Ok(message) => progress.on_message_appended(&message),
                Err(e) => warn!(session_id = %session_id, "Failed to store judge message: {}", e),
            },
            Err(e) => warn!(session_id = %session_id, "Failed to serialize verdict: {}", e),
        }

        if let (Some(owner), Some(delta)) = (session.owner(), outcome.stats_delta) {
            self.record_outcome(owner, delta).await;
        }

        info!(
            session_id = %session_id,
            winner = %outcome.winner,
            pro = verdict.score.pro,
            con = verdict.score.con,
            "Debate judged"
        );
        self.conversation_logger.log(ConversationEvent::new(
            "debate_judged",
            serde_json::json!({
                "session_id": session_id.0,
                "winner": outcome.winner.as_str(),
                "verdict": verdict,
            }),
        ));

        Ok(EndDebateOutput { session, verdict })
    }

    async fn request_verdict(
        &self,
        session_id: SessionId,
        prompt: &[ChatMessage],
        progress: &dyn DebateProgressNotifier,
    ) -> Result<Verdict, DebateError> {
        let result: Result<Verdict, DebateError> = async {
            let raw = complete_cancellable(
                self.provider.as_ref(),
                prompt,
                Some(&verdict_schema()),
                ProviderCall::Judging,
                progress,
                &self.cancellation_token,
            )
            .await?;
            Ok(Verdict::parse(&raw)?)
        }
        .await;

        if let Err(err) = &result {
            self.log_provider_failure(Some(session_id), "end", err);
        }
        result
    }

    /// Apply the outcome to the owner's stats; failures are logged only
    async fn record_outcome(&self, owner: UserId, delta: StatsDelta) {
        match self.store.apply_stats_delta(owner, delta).await {
            Ok(stats) => debug!(
                user_id = %owner,
                total_debates = stats.total_debates,
                "Recorded debate outcome"
            ),
            Err(e) => warn!(user_id = %owner, "Failed to update stats: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{MockStore, ScriptedProvider, verdict_json};
    use super::super::{CreateDebateInput, ErrorKind};
    use super::*;
    use debate_domain::{DebateMode, Position, SessionStatus, UserStats, VerdictWinner, Winner};
    use std::sync::Arc;

    const OWNER: UserId = UserId(1);

    async fn human_debate(
        human: Position,
        responses: Vec<String>,
    ) -> (
        DebateOrchestrator<ScriptedProvider, MockStore>,
        Arc<ScriptedProvider>,
        Arc<MockStore>,
        SessionId,
    ) {
        let provider = Arc::new(ScriptedProvider::new(
            responses.into_iter().map(Ok).collect(),
        ));
        let store = Arc::new(MockStore::new());
        store.register_user(OWNER);
        let orchestrator = DebateOrchestrator::new(provider.clone(), store.clone());
        let id = orchestrator
            .create(
                CreateDebateInput::new(DebateMode::HumanVsModel)
                    .with_owner(OWNER)
                    .with_topic("X")
                    .with_position(human),
            )
            .await
            .unwrap()
            .session
            .id();
        (orchestrator, provider, store, id)
    }

    #[tokio::test]
    async fn test_human_vs_model_scenario() {
        let (orchestrator, _, store, id) = human_debate(
            Position::Pro,
            vec!["X is not good".to_string(), verdict_json("con")],
        )
        .await;

        orchestrator
            .exchange_turn(id, "I think X is good")
            .await
            .unwrap();
        assert_eq!(store.messages(id).len(), 3);

        let output = orchestrator.end(id).await.unwrap();

        assert_eq!(output.session.status(), SessionStatus::Finished);
        assert_eq!(output.session.winner(), Some(Winner::Model));
        assert_eq!(output.session.judge_comment(), Some("con takes it"));
        assert!(output.session.finished_at().is_some());
        assert_eq!(output.verdict.winner, VerdictWinner::Con);

        let stored = store.session(id).unwrap();
        assert_eq!(stored.winner(), Some(Winner::Model));

        let stats = store.stats(OWNER).unwrap();
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.wins, 0);
        assert_eq!(stats.total_debates, 1);

        let last = store.messages(id).pop().unwrap();
        assert_eq!(last.role, Role::Judge);
        assert_eq!(Verdict::parse(&last.content).unwrap(), output.verdict);
    }

    #[tokio::test]
    async fn test_human_on_winning_side_gets_a_win() {
        let (orchestrator, _, store, id) =
            human_debate(Position::Pro, vec![verdict_json("pro")]).await;

        let output = orchestrator.end(id).await.unwrap();

        assert_eq!(output.session.winner(), Some(Winner::Human));
        let stats = store.stats(OWNER).unwrap();
        assert_eq!(
            stats,
            UserStats {
                user_id: OWNER,
                total_debates: 1,
                wins: 1,
                losses: 0,
                draws: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_draw_counts_as_draw() {
        let (orchestrator, _, store, id) =
            human_debate(Position::Con, vec![verdict_json("draw")]).await;

        let output = orchestrator.end(id).await.unwrap();

        assert_eq!(output.session.winner(), Some(Winner::Draw));
        assert_eq!(store.stats(OWNER).unwrap().draws, 1);
    }

    #[tokio::test]
    async fn test_end_is_not_idempotent() {
        let (orchestrator, provider, store, id) = human_debate(
            Position::Pro,
            vec![verdict_json("pro"), verdict_json("con")],
        )
        .await;

        orchestrator.end(id).await.unwrap();
        let err = orchestrator.end(id).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidState);
        let stored = store.session(id).unwrap();
        assert_eq!(stored.winner(), Some(Winner::Human));
        assert_eq!(stored.judge_comment(), Some("pro takes it"));
        assert_eq!(store.stats(OWNER).unwrap().total_debates, 1);
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_verdict_commits_nothing() {
        let (orchestrator, _, store, id) = human_debate(
            Position::Pro,
            vec![r#"{"winner": "pro"}"#.to_string()],
        )
        .await;

        let err = orchestrator.end(id).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Provider);
        assert!(store.session(id).unwrap().is_active());
        assert_eq!(store.messages(id).len(), 1);
        assert_eq!(store.stats(OWNER).unwrap().total_debates, 0);
    }

    #[tokio::test]
    async fn test_session_update_failure_aborts_end() {
        let (orchestrator, _, store, id) =
            human_debate(Position::Pro, vec![verdict_json("pro")]).await;
        store.fail_update_session();

        let err = orchestrator.end(id).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Persistence);
        assert!(store.session(id).unwrap().is_active());
        assert_eq!(store.stats(OWNER).unwrap().total_debates, 0);
    }

    #[tokio::test]
    async fn test_secondary_write_failures_are_swallowed() {
        let (orchestrator, _, store, id) =
            human_debate(Position::Pro, vec![verdict_json("pro")]).await;
        store.fail_append(Role::Judge);
        store.fail_update_stats();

        let output = orchestrator.end(id).await.unwrap();

        assert_eq!(output.session.winner(), Some(Winner::Human));
        assert!(!store.session(id).unwrap().is_active());
        assert_eq!(store.stats(OWNER).unwrap().total_debates, 0);
    }

    #[tokio::test]
    async fn test_concurrent_ends_for_one_owner_both_count() {
        let (orchestrator, _, store, first) = human_debate(
            Position::Pro,
            vec![verdict_json("pro"), verdict_json("pro")],
        )
        .await;
        let second = orchestrator
            .create(
                CreateDebateInput::new(DebateMode::HumanVsModel)
                    .with_owner(OWNER)
                    .with_topic("Y")
                    .with_position(Position::Pro),
            )
            .await
            .unwrap()
            .session
            .id();

        let (a, b) = tokio::join!(orchestrator.end(first), orchestrator.end(second));
        a.unwrap();
        b.unwrap();

        let stats = store.stats(OWNER).unwrap();
        assert_eq!(stats.total_debates, 2);
        assert_eq!(stats.wins, 2);
    }

    #[tokio::test]
    async fn test_end_on_unknown_session_is_not_found() {
        let (orchestrator, provider, store, _) =
            human_debate(Position::Pro, vec![verdict_json("pro")]).await;

        let err = orchestrator.end(SessionId(999)).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(provider.call_count(), 0);
        assert_eq!(store.stats(OWNER).unwrap().total_debates, 0);
    }

    #[tokio::test]
    async fn test_ownerless_human_debate_leaves_stats_untouched() {
        let provider = Arc::new(ScriptedProvider::new(vec![Ok(verdict_json("pro"))]));
        let store = Arc::new(MockStore::new());
        store.register_user(OWNER);
        let orchestrator = DebateOrchestrator::new(provider, store.clone());
        let id = orchestrator
            .create(
                CreateDebateInput::new(DebateMode::HumanVsModel)
                    .with_topic("X")
                    .with_position(Position::Pro),
            )
            .await
            .unwrap()
            .session
            .id();

        let output = orchestrator.end(id).await.unwrap();

        assert_eq!(output.session.winner(), Some(Winner::Human));
        assert!(!store.session(id).unwrap().is_active());
        assert_eq!(store.stats(OWNER).unwrap(), UserStats::new(OWNER));
    }

    #[tokio::test]
    async fn test_model_debate_maps_sides_to_agents_without_stats() {
        let provider = Arc::new(ScriptedProvider::new(vec![Ok(verdict_json("con"))]));
        let store = Arc::new(MockStore::new());
        store.register_user(OWNER);
        let orchestrator = DebateOrchestrator::new(provider.clone(), store.clone());
        let id = orchestrator
            .create(
                CreateDebateInput::new(DebateMode::ModelVsModel)
                    .with_owner(OWNER)
                    .with_topic("X"),
            )
            .await
            .unwrap()
            .session
            .id();

        let output = orchestrator.end(id).await.unwrap();

        assert_eq!(output.session.winner(), Some(Winner::Agent2));
        assert_eq!(store.stats(OWNER).unwrap().total_debates, 0);
        assert_eq!(provider.calls()[0].schema.as_deref(), Some("judge_result"));
    }

    #[tokio::test]
    async fn test_model_vs_model_scenario() {
        let mut responses: Vec<_> = (1..=10).map(|i| Ok(format!("turn {}", i))).collect();
        responses.push(Ok(verdict_json("pro")));
        let provider = Arc::new(ScriptedProvider::new(responses));
        let store = Arc::new(MockStore::new());
        let orchestrator = DebateOrchestrator::new(provider.clone(), store.clone());
        let id = orchestrator
            .create(CreateDebateInput::new(DebateMode::ModelVsModel).with_topic("X"))
            .await
            .unwrap()
            .session
            .id();

        let mut finished = false;
        let mut steps = 0;
        while !finished {
            finished = orchestrator.advance_step(id).await.unwrap().finished;
            steps += 1;
        }
        assert_eq!(steps, 10);

        let output = orchestrator.end(id).await.unwrap();
        assert_eq!(output.session.winner(), Some(Winner::Agent1));

        let judge_prompt = &provider.calls()[10].messages;
        assert_eq!(judge_prompt.len(), 2);
        assert!(judge_prompt[1].content.contains("[Pro (AI-1)]\nturn 1"));
        assert!(judge_prompt[1].content.contains("[Con (AI-2)]\nturn 10"));
    }
}
