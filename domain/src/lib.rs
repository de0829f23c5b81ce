//! Domain layer for llm-debate
//!
//! This crate contains the core debate model, turn scheduling, prompt
//! assembly and verdict handling. It has no dependencies on infrastructure
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Debate Session
//!
//! A session is a single debate on one topic. It runs in one of two modes:
//!
//! - **Human vs Model**: a user argues one side, the model the other, until
//!   the user ends the debate
//! - **Model vs Model**: two agents alternate, agent1 on pro and agent2 on
//!   con, for [`ROUND_CAP`] turns each
//!
//! ## Judging
//!
//! Ending a session asks a judge for a structured [`Verdict`] naming the
//! winning side; [`map_verdict`] turns that into the session's winner and,
//! for human-vs-model debates, a change to the owner's [`UserStats`].

pub mod completion;
pub mod config;
pub mod core;
pub mod debate;
pub mod judging;
pub mod prompt;

// Re-export commonly used types
pub use completion::{ChatMessage, ChatRole, ResponseSchema};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use debate::{
    entities::{
        DebateMode, DebateSession, Outcome, Position, PositionChoice, Seat, Seating, SessionId,
        SessionState, SessionStatus, UserId, Winner,
    },
    message::{DebateMessage, Role},
    scheduler::{ROUND_CAP, TurnCounts, TurnDecision, TurnScheduler},
    stats::{StatsDelta, UserStats},
    topic::{TopicBrief, topic_schema},
};
pub use judging::{JudgedOutcome, Score, Verdict, VerdictWinner, map_verdict, verdict_schema};
pub use prompt::{
    DebatePromptTemplate, Perspective, PerspectiveTurn, assemble_debater_prompt,
    assemble_judge_prompt, assemble_topic_prompt, reinterpret,
};
