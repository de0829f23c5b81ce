//! Per-user aggregate outcomes for human-vs-model debates

use super::entities::UserId;
use serde::{Deserialize, Serialize};

/// How a single finished debate changes a user's record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsDelta {
    Win,
    Loss,
    Draw,
}

/// Aggregate results for one user (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub user_id: UserId,
    pub total_debates: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl UserStats {
    /// Zeroed record for a newly registered user
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            total_debates: 0,
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    /// Count one more finished debate
    pub fn apply(&mut self, delta: StatsDelta) {
        self.total_debates += 1;
        match delta {
            StatsDelta::Win => self.wins += 1,
            StatsDelta::Loss => self.losses += 1,
            StatsDelta::Draw => self.draws += 1,
        }
    }

    /// Fraction of debates won, `0.0` before the first debate
    pub fn win_rate(&self) -> f64 {
        if self.total_debates == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.total_debates)
        }
    }
}
