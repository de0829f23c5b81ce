//! Mapping a side-based verdict onto session participants

use super::verdict::VerdictWinner;
use crate::debate::entities::{Position, Seating, Winner};
use crate::debate::stats::StatsDelta;

/// Session-semantic result of a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JudgedOutcome {
    pub winner: Winner,
    /// Change to the owner's record; `None` for model-vs-model debates
    pub stats_delta: Option<StatsDelta>,
}

/// Translate the judge's winning side into the session's winner.
///
/// Human-vs-model: the side the human sits on decides `human` vs `model`.
/// Model-vs-model: `pro` is agent1 and `con` is agent2.
pub fn map_verdict(seating: &Seating, winner: VerdictWinner) -> JudgedOutcome {
    match seating {
        Seating::HumanVsModel { human } => {
            let (winner, delta) = match side_of(winner) {
                Some(side) if side == *human => (Winner::Human, StatsDelta::Win),
                Some(_) => (Winner::Model, StatsDelta::Loss),
                None => (Winner::Draw, StatsDelta::Draw),
            };
            JudgedOutcome {
                winner,
                stats_delta: Some(delta),
            }
        }
        Seating::ModelVsModel => JudgedOutcome {
            winner: match winner {
                VerdictWinner::Pro => Winner::Agent1,
                VerdictWinner::Con => Winner::Agent2,
                VerdictWinner::Draw => Winner::Draw,
            },
            stats_delta: None,
        },
    }
}

fn side_of(winner: VerdictWinner) -> Option<Position> {
    match winner {
        VerdictWinner::Pro => Some(Position::Pro),
        VerdictWinner::Con => Some(Position::Con),
        VerdictWinner::Draw => None,
    }
}
