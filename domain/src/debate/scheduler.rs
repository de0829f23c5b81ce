//! Turn scheduling for model-vs-model debates.
//!
//! Whose turn it is, and whether the debate is over, is derived from the
//! stored transcript on every call:
//!
//! ```text
//! counts (agent1, agent2)   decision
//! (0, 0)                    agent1 speaks
//! (1, 0)                    agent2 speaks
//! (4, 4)                    agent1 speaks
//! (5, 4)                    agent2 speaks, finishes_debate = true
//! (5, 5)                    Complete
//! ```
//!
//! The agent with fewer (or equal) messages always speaks next, so an
//! interrupted step self-corrects on the following call.

use super::message::{DebateMessage, Role};

/// Maximum number of turns each agent takes
pub const ROUND_CAP: usize = 5;

/// Per-agent message counts taken from a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnCounts {
    pub agent1: usize,
    pub agent2: usize,
}

impl TurnCounts {
    pub fn new(agent1: usize, agent2: usize) -> Self {
        Self { agent1, agent2 }
    }

    /// Count agent messages in a transcript
    pub fn tally(messages: &[DebateMessage]) -> Self {
        messages
            .iter()
            .fold(Self::default(), |mut counts, message| {
                match message.role {
                    Role::Agent1 => counts.agent1 += 1,
                    Role::Agent2 => counts.agent2 += 1,
                    Role::System | Role::Human | Role::Model | Role::Judge => {}
                }
                counts
            })
    }

    /// Both agents have used all their turns
    pub fn is_complete(&self) -> bool {
        self.agent1 >= ROUND_CAP && self.agent2 >= ROUND_CAP
    }

    /// Counts after `role` speaks once more
    pub fn after(&self, role: Role) -> Self {
        let mut next = *self;
        match role {
            Role::Agent1 => next.agent1 += 1,
            Role::Agent2 => next.agent2 += 1,
            Role::System | Role::Human | Role::Model | Role::Judge => {}
        }
        next
    }
}

/// What the scheduler decided for the next step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDecision {
    /// `role` speaks next; `finishes_debate` is true when that turn is the last
    Speak { role: Role, finishes_debate: bool },
    /// Both agents reached the round cap
    Complete,
}

/// Turn order and round cap for model-vs-model debates
pub struct TurnScheduler;

impl TurnScheduler {
    /// Decide the next step from the transcript as currently stored
    pub fn next_turn(messages: &[DebateMessage]) -> TurnDecision {
        Self::decide(TurnCounts::tally(messages))
    }

    /// Decide the next step from already-tallied counts
    pub fn decide(counts: TurnCounts) -> TurnDecision {
        if counts.is_complete() {
            return TurnDecision::Complete;
        }

        let role = if counts.agent1 <= counts.agent2 {
            Role::Agent1
        } else {
            Role::Agent2
        };

        TurnDecision::Speak {
            role,
            finishes_debate: counts.after(role).is_complete(),
        }
    }
}
