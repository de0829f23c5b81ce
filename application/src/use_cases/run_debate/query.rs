//! Read-only queries over sessions and stats.

use super::{DebateDetail, DebateError, DebateOrchestrator};
use crate::ports::completion::CompletionProvider;
use crate::ports::transcript_store::TranscriptStore;
use debate_domain::{DebateSession, SessionId, UserId, UserStats};

impl<P: CompletionProvider + 'static, S: TranscriptStore + 'static> DebateOrchestrator<P, S> {
    /// A session with its full transcript
    pub async fn debate_detail(&self, session_id: SessionId) -> Result<DebateDetail, DebateError> {
        let session = self.store.get_session(session_id).await?;
        let messages = self.store.list_messages(session_id).await?;
        Ok(DebateDetail { session, messages })
    }

    pub async fn user_stats(&self, user: UserId) -> Result<UserStats, DebateError> {
        Ok(self.store.get_stats(user).await?)
    }

    /// Sessions owned by `user`, newest first
    pub async fn user_history(&self, user: UserId) -> Result<Vec<DebateSession>, DebateError> {
        Ok(self.store.list_sessions_for_user(user).await?)
    }
}
