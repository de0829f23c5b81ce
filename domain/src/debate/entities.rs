//! Debate session entities
//!
//! A [`DebateSession`] owns its lifecycle invariants by construction:
//!
//! - [`Seating`] carries side assignments only for the mode that needs them
//!   (the human's side in human-vs-model; fixed agent sides in model-vs-model).
//! - [`SessionState`] carries winner, judge comment and completion time only
//!   once the session is finished.

use super::message::Role;
use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a debate session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub i64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a registered user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Side of the motion a debater argues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Pro,
    Con,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Pro => "pro",
            Position::Con => "con",
        }
    }

    /// Display label used in prompts and transcripts
    pub fn label(&self) -> &'static str {
        match self {
            Position::Pro => "Pro",
            Position::Con => "Con",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Position::Pro => Position::Con,
            Position::Con => Position::Pro,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pro" => Ok(Position::Pro),
            "con" => Ok(Position::Con),
            _ => Err(DomainError::InvalidPosition(s.to_string())),
        }
    }
}

/// A caller's requested side for the human, before randomness is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionChoice {
    Pro,
    Con,
    #[default]
    Random,
}

impl PositionChoice {
    /// The fixed side, or `None` when the side should be drawn at random
    pub fn fixed(&self) -> Option<Position> {
        match self {
            PositionChoice::Pro => Some(Position::Pro),
            PositionChoice::Con => Some(Position::Con),
            PositionChoice::Random => None,
        }
    }
}

impl From<Position> for PositionChoice {
    fn from(position: Position) -> Self {
        match position {
            Position::Pro => PositionChoice::Pro,
            Position::Con => PositionChoice::Con,
        }
    }
}

impl fmt::Display for PositionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionChoice::Pro => write!(f, "pro"),
            PositionChoice::Con => write!(f, "con"),
            PositionChoice::Random => write!(f, "random"),
        }
    }
}

impl std::str::FromStr for PositionChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pro" => Ok(PositionChoice::Pro),
            "con" => Ok(PositionChoice::Con),
            "random" | "" => Ok(PositionChoice::Random),
            _ => Err(DomainError::InvalidPosition(s.to_string())),
        }
    }
}

/// Who debates whom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebateMode {
    HumanVsModel,
    ModelVsModel,
}

impl DebateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebateMode::HumanVsModel => "human_vs_model",
            DebateMode::ModelVsModel => "model_vs_model",
        }
    }
}

impl fmt::Display for DebateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DebateMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "human_vs_model" | "human" => Ok(DebateMode::HumanVsModel),
            "model_vs_model" | "model" => Ok(DebateMode::ModelVsModel),
            _ => Err(DomainError::InvalidMode(s.to_string())),
        }
    }
}

/// A debater role bound to the side it argues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub role: Role,
    pub position: Position,
}

/// Side assignments for a session.
///
/// In model-vs-model debates `agent1` always argues pro and `agent2` con.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Seating {
    HumanVsModel { human: Position },
    ModelVsModel,
}

impl Seating {
    pub fn mode(&self) -> DebateMode {
        match self {
            Seating::HumanVsModel { .. } => DebateMode::HumanVsModel,
            Seating::ModelVsModel => DebateMode::ModelVsModel,
        }
    }

    /// The side `role` argues, or `None` if the role has no seat in this mode
    pub fn position_of(&self, role: Role) -> Option<Position> {
        match (self, role) {
            (Seating::HumanVsModel { human }, Role::Human) => Some(*human),
            (Seating::HumanVsModel { human }, Role::Model) => Some(human.opposite()),
            (Seating::HumanVsModel { .. }, Role::Agent1 | Role::Agent2) => None,
            (Seating::ModelVsModel, Role::Agent1) => Some(Position::Pro),
            (Seating::ModelVsModel, Role::Agent2) => Some(Position::Con),
            (Seating::ModelVsModel, Role::Human | Role::Model) => None,
            (_, Role::System | Role::Judge) => None,
        }
    }

    pub fn seat_for(&self, role: Role) -> Option<Seat> {
        self.position_of(role).map(|position| Seat { role, position })
    }

    /// The role sitting on `position`
    pub fn role_on(&self, position: Position) -> Role {
        match (self, position) {
            (Seating::HumanVsModel { human }, p) if p == *human => Role::Human,
            (Seating::HumanVsModel { .. }, _) => Role::Model,
            (Seating::ModelVsModel, Position::Pro) => Role::Agent1,
            (Seating::ModelVsModel, Position::Con) => Role::Agent2,
        }
    }

    pub fn human_position(&self) -> Option<Position> {
        self.position_of(Role::Human)
    }

    pub fn model_position(&self) -> Option<Position> {
        self.position_of(Role::Model)
    }
}

/// Lifecycle status of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    Finished,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Active => "active",
            SessionStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session-level winner, expressed in the session's own participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Human,
    Model,
    Agent1,
    Agent2,
    Draw,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::Human => "human",
            Winner::Model => "model",
            Winner::Agent1 => "agent1",
            Winner::Agent2 => "agent2",
            Winner::Draw => "draw",
        }
    }

    /// Check if this winner can occur in `mode`
    pub fn allowed_in(&self, mode: DebateMode) -> bool {
        match (self, mode) {
            (Winner::Draw, _) => true,
            (Winner::Human | Winner::Model, DebateMode::HumanVsModel) => true,
            (Winner::Agent1 | Winner::Agent2, DebateMode::ModelVsModel) => true,
            (Winner::Human | Winner::Model, DebateMode::ModelVsModel) => false,
            (Winner::Agent1 | Winner::Agent2, DebateMode::HumanVsModel) => false,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a finished session records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Winner,
    pub judge_comment: String,
    pub finished_at: DateTime<Utc>,
}

/// Session lifecycle: `Active` → `Finished`, never back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionState {
    Active,
    Finished(Outcome),
}

/// A debate instance (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateSession {
    id: SessionId,
    owner: Option<UserId>,
    topic: String,
    #[serde(flatten)]
    seating: Seating,
    #[serde(flatten)]
    state: SessionState,
    created_at: DateTime<Utc>,
}

impl DebateSession {
    /// Create an active session.
    ///
    /// Model-vs-model sessions have no owner; any owner passed for them is
    /// dropped.
    pub fn new(
        id: SessionId,
        owner: Option<UserId>,
        topic: impl Into<String>,
        seating: Seating,
        created_at: DateTime<Utc>,
    ) -> Self {
        let owner = match seating {
            Seating::HumanVsModel { .. } => owner,
            Seating::ModelVsModel => None,
        };
        Self {
            id,
            owner,
            topic: topic.into(),
            seating,
            state: SessionState::Active,
            created_at,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn owner(&self) -> Option<UserId> {
        self.owner
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    pub fn mode(&self) -> DebateMode {
        self.seating.mode()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn status(&self) -> SessionStatus {
        match self.state {
            SessionState::Active => SessionStatus::Active,
            SessionState::Finished(_) => SessionStatus::Finished,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active)
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.state {
            SessionState::Active => None,
            SessionState::Finished(outcome) => Some(outcome),
        }
    }

    pub fn winner(&self) -> Option<Winner> {
        self.outcome().map(|o| o.winner)
    }

    pub fn judge_comment(&self) -> Option<&str> {
        self.outcome().map(|o| o.judge_comment.as_str())
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.outcome().map(|o| o.finished_at)
    }

    /// Transition to `Finished`.
    ///
    /// Fails if the session already finished or if `winner` cannot occur in
    /// this session's mode; the session is left untouched on failure.
    pub fn finish(
        &mut self,
        winner: Winner,
        judge_comment: impl Into<String>,
        finished_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if !self.is_active() {
            return Err(DomainError::AlreadyFinished);
        }
        if !winner.allowed_in(self.mode()) {
            return Err(DomainError::WinnerNotAllowed {
                winner: winner.to_string(),
                mode: self.mode().to_string(),
            });
        }
        self.state = SessionState::Finished(Outcome {
            winner,
            judge_comment: judge_comment.into(),
            finished_at,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human_session(human: Position) -> DebateSession {
        DebateSession::new(
            SessionId(1),
            Some(UserId(7)),
            "Cities should ban cars",
            Seating::HumanVsModel { human },
            Utc::now(),
        )
    }

    #[test]
    fn test_new_session_is_active_without_outcome() {
        let session = human_session(Position::Pro);
        assert_eq!(session.status(), SessionStatus::Active);
        assert!(session.winner().is_none());
        assert!(session.judge_comment().is_none());
        assert!(session.finished_at().is_none());
    }

    #[test]
    fn test_human_and_model_sides_are_complementary() {
        let seating = Seating::HumanVsModel {
            human: Position::Con,
        };
        assert_eq!(seating.human_position(), Some(Position::Con));
        assert_eq!(seating.model_position(), Some(Position::Pro));
        assert_eq!(seating.position_of(Role::Agent1), None);
        assert_eq!(seating.role_on(Position::Con), Role::Human);
        assert_eq!(seating.role_on(Position::Pro), Role::Model);
    }

    #[test]
    fn test_agent_sides_are_fixed() {
        let seating = Seating::ModelVsModel;
        assert_eq!(seating.position_of(Role::Agent1), Some(Position::Pro));
        assert_eq!(seating.position_of(Role::Agent2), Some(Position::Con));
        assert_eq!(seating.human_position(), None);
        assert_eq!(seating.model_position(), None);
        assert_eq!(seating.role_on(Position::Pro), Role::Agent1);
    }

    #[test]
    fn test_model_vs_model_drops_owner() {
        let session = DebateSession::new(
            SessionId(2),
            Some(UserId(7)),
            "topic",
            Seating::ModelVsModel,
            Utc::now(),
        );
        assert_eq!(session.owner(), None);
    }

    #[test]
    fn test_finish_sets_outcome() {
        let mut session = human_session(Position::Pro);
        let now = Utc::now();
        session.finish(Winner::Human, "Well argued", now).unwrap();

        assert_eq!(session.status(), SessionStatus::Finished);
        assert_eq!(session.winner(), Some(Winner::Human));
        assert_eq!(session.judge_comment(), Some("Well argued"));
        assert_eq!(session.finished_at(), Some(now));
    }

    #[test]
    fn test_finish_twice_fails_and_keeps_first_outcome() {
        let mut session = human_session(Position::Pro);
        session.finish(Winner::Model, "first", Utc::now()).unwrap();

        let err = session.finish(Winner::Human, "second", Utc::now()).unwrap_err();
        assert_eq!(err, DomainError::AlreadyFinished);
        assert_eq!(session.winner(), Some(Winner::Model));
        assert_eq!(session.judge_comment(), Some("first"));
    }

    #[test]
    fn test_finish_rejects_winner_from_other_mode() {
        let mut session = human_session(Position::Pro);
        let err = session.finish(Winner::Agent1, "x", Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::WinnerNotAllowed { .. }));
        assert!(session.is_active());
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(
            "human_vs_model".parse::<DebateMode>().unwrap(),
            DebateMode::HumanVsModel
        );
        assert_eq!(
            "MODEL_VS_MODEL".parse::<DebateMode>().unwrap(),
            DebateMode::ModelVsModel
        );
        assert!("three_way".parse::<DebateMode>().is_err());
    }

    #[test]
    fn test_position_choice_parse() {
        assert_eq!("pro".parse::<PositionChoice>().unwrap(), PositionChoice::Pro);
        assert_eq!(
            "random".parse::<PositionChoice>().unwrap(),
            PositionChoice::Random
        );
        assert_eq!("".parse::<PositionChoice>().unwrap(), PositionChoice::Random);
        assert!("maybe".parse::<PositionChoice>().is_err());
        assert_eq!(PositionChoice::Con.fixed(), Some(Position::Con));
        assert_eq!(PositionChoice::Random.fixed(), None);
    }

    #[test]
    fn test_session_serializes_flat_status_and_mode() {
        let mut session = human_session(Position::Con);
        session.finish(Winner::Draw, "Even", Utc::now()).unwrap();

        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["mode"], "human_vs_model");
        assert_eq!(value["human"], "con");
        assert_eq!(value["status"], "finished");
        assert_eq!(value["winner"], "draw");
        assert_eq!(value["judge_comment"], "Even");
    }
}
