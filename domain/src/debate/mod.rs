//! Debate domain.
//!
//! - [`entities::DebateSession`]: one debate with its seating and lifecycle
//! - [`message::DebateMessage`]: a single transcript entry
//! - [`stats::UserStats`]: per-user aggregate outcomes
//! - [`scheduler::TurnScheduler`]: model-vs-model turn order and round cap
//! - [`topic::TopicBrief`]: a generated motion with side descriptions

pub mod entities;
pub mod message;
pub mod scheduler;
pub mod stats;
pub mod topic;
