//! Hand-written mocks for orchestrator tests.

use crate::ports::completion::{CompletionProvider, ProviderError};
use crate::ports::transcript_store::{NewSession, StoreError, TranscriptStore};
use async_trait::async_trait;
use chrono::Utc;
use debate_domain::{
    ChatMessage, DebateMessage, DebateSession, ResponseSchema, Role, SessionId, StatsDelta, UserId,
    UserStats,
};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

pub(crate) fn topic_json(topic: &str) -> String {
    serde_json::json!({
        "topic": topic,
        "pro_position": "It helps",
        "con_position": "It harms",
        "background": "A long-running argument",
    })
    .to_string()
}

pub(crate) fn verdict_json(winner: &str) -> String {
    serde_json::json!({
        "winner": winner,
        "score": { "pro": 70, "con": 60 },
        "reasoning": "Better evidence.",
        "pro_strengths": ["data"],
        "pro_weaknesses": ["length"],
        "con_strengths": ["rebuttals"],
        "con_weaknesses": ["sources"],
        "final_comment": format!("{} takes it", winner),
    })
    .to_string()
}

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub messages: Vec<ChatMessage>,
    pub schema: Option<String>,
}

/// Provider returning scripted responses in order.
///
/// Once the script runs out, free-text calls answer "reply N" and
/// structured calls fail.
pub(crate) struct ScriptedProvider {
    responses: Mutex<VecDeque<Result<String, ProviderError>>>,
    calls: Mutex<Vec<RecordedCall>>,
    hang: bool,
}

impl ScriptedProvider {
    pub fn new(responses: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
            hang: false,
        }
    }

    /// A provider whose calls never return
    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::new(vec![])
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    async fn respond(
        &self,
        messages: &[ChatMessage],
        schema: Option<&ResponseSchema>,
    ) -> Result<String, ProviderError> {
        if messages.is_empty() {
            return Err(ProviderError::EmptyRequest);
        }
        let call_number = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(RecordedCall {
                messages: messages.to_vec(),
                schema: schema.map(|s| s.name.clone()),
            });
            calls.len()
        };
        if self.hang {
            std::future::pending::<()>().await;
        }
        match self.responses.lock().unwrap().pop_front() {
            Some(response) => response,
            None if schema.is_none() => Ok(format!("reply {}", call_number)),
            None => Err(ProviderError::InvalidResponse(
                "no scripted structured response".to_string(),
            )),
        }
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        self.respond(messages, None).await
    }

    async fn complete_structured(
        &self,
        messages: &[ChatMessage],
        schema: &ResponseSchema,
    ) -> Result<String, ProviderError> {
        self.respond(messages, Some(schema)).await
    }
}

#[derive(Default)]
struct StoreState {
    sessions: Vec<DebateSession>,
    messages: Vec<DebateMessage>,
    stats: HashMap<UserId, UserStats>,
    next_session_id: i64,
    next_message_id: i64,
}

/// In-memory store with switchable failures
#[derive(Default)]
pub(crate) struct MockStore {
    state: Mutex<StoreState>,
    fail_update_session: AtomicBool,
    fail_update_stats: AtomicBool,
    fail_append_role: Mutex<Option<Role>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_user(&self, user: UserId) {
        self.state
            .lock()
            .unwrap()
            .stats
            .insert(user, UserStats::new(user));
    }

    pub fn stats(&self, user: UserId) -> Option<UserStats> {
        self.state.lock().unwrap().stats.get(&user).cloned()
    }

    pub fn messages(&self, session_id: SessionId) -> Vec<DebateMessage> {
        self.state
            .lock()
            .unwrap()
            .messages
            .iter()
            .filter(|m| m.session_id == session_id)
            .cloned()
            .collect()
    }

    pub fn session(&self, id: SessionId) -> Option<DebateSession> {
        self.state
            .lock()
            .unwrap()
            .sessions
            .iter()
            .find(|s| s.id() == id)
            .cloned()
    }

    pub fn session_count(&self) -> usize {
        self.state.lock().unwrap().sessions.len()
    }

    pub fn fail_update_session(&self) {
        self.fail_update_session.store(true, Ordering::SeqCst);
    }

    pub fn fail_update_stats(&self) {
        self.fail_update_stats.store(true, Ordering::SeqCst);
    }

    pub fn fail_append(&self, role: Role) {
        *self.fail_append_role.lock().unwrap() = Some(role);
    }
}

#[async_trait]
impl TranscriptStore for MockStore {
    async fn create_session(&self, new: NewSession) -> Result<DebateSession, StoreError> {
        let mut state = self.state.lock().unwrap();
        state.next_session_id += 1;
        let session = DebateSession::new(
            SessionId(state.next_session_id),
            new.owner,
            new.topic,
            new.seating,
            Utc::now(),
        );
        state.sessions.push(session.clone());
        Ok(session)
    }

    async fn get_session(&self, id: SessionId) -> Result<DebateSession, StoreError> {
        self.session(id)
            .ok_or_else(|| StoreError::NotFound(format!("session {}", id)))
    }

    async fn update_session(&self, session: &DebateSession) -> Result<(), StoreError> {
        if self.fail_update_session.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("update_session failed".to_string()));
        }
        let mut state = self.state.lock().unwrap();
        let slot = state
            .sessions
            .iter_mut()
            .find(|s| s.id() == session.id())
            .ok_or_else(|| StoreError::NotFound(format!("session {}", session.id())))?;
        *slot = session.clone();
        Ok(())
    }

    async fn append_message(
        &self,
        session_id: SessionId,
        role: Role,
        content: &str,
    ) -> Result<DebateMessage, StoreError> {
        if *self.fail_append_role.lock().unwrap() == Some(role) {
            return Err(StoreError::Backend(format!("append {} failed", role)));
        }
        let mut state = self.state.lock().unwrap();
        if !state.sessions.iter().any(|s| s.id() == session_id) {
            return Err(StoreError::NotFound(format!("session {}", session_id)));
        }
        state.next_message_id += 1;
        let message = DebateMessage::new(
            state.next_message_id,
            session_id,
            role,
            content,
            Utc::now(),
        );
        state.messages.push(message.clone());
        Ok(message)
    }

    async fn list_messages(&self, session_id: SessionId) -> Result<Vec<DebateMessage>, StoreError> {
        Ok(self.messages(session_id))
    }

    async fn get_stats(&self, user: UserId) -> Result<UserStats, StoreError> {
        // Suspend like a real backend would, so joined callers interleave
        tokio::task::yield_now().await;
        self.stats(user)
            .ok_or_else(|| StoreError::NotFound(format!("stats for user {}", user)))
    }

    async fn apply_stats_delta(
        &self,
        user: UserId,
        delta: StatsDelta,
    ) -> Result<UserStats, StoreError> {
        tokio::task::yield_now().await;
        if self.fail_update_stats.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("apply_stats_delta failed".to_string()));
        }
        let mut state = self.state.lock().unwrap();
        let stats = state
            .stats
            .get_mut(&user)
            .ok_or_else(|| StoreError::NotFound(format!("stats for user {}", user)))?;
        stats.apply(delta);
        Ok(stats.clone())
    }

    async fn list_sessions_for_user(&self, user: UserId) -> Result<Vec<DebateSession>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .sessions
            .iter()
            .rev()
            .filter(|s| s.owner() == Some(user))
            .cloned()
            .collect())
    }
}
