//! Debate defaults from TOML (`[debate]` section)

use debate_domain::{ConfigIssue, DebateMode, PositionChoice};
use serde::{Deserialize, Serialize};

/// Defaults applied when the command line does not choose
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    /// "human_vs_model" or "model_vs_model"
    pub mode: String,
    /// "pro", "con" or "random"
    pub position: String,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self {
            mode: DebateMode::HumanVsModel.to_string(),
            position: PositionChoice::Random.to_string(),
        }
    }
}

impl FileDebateConfig {
    /// Parse the mode, falling back to human-vs-model
    pub fn parse_mode(&self) -> (DebateMode, Vec<ConfigIssue>) {
        match self.mode.parse() {
            Ok(mode) => (mode, vec![]),
            Err(_) => (
                DebateMode::HumanVsModel,
                vec![ConfigIssue::invalid_value(
                    "debate.mode",
                    &self.mode,
                    &["human_vs_model", "model_vs_model"],
                )],
            ),
        }
    }

    /// Parse the position, falling back to random
    pub fn parse_position(&self) -> (PositionChoice, Vec<ConfigIssue>) {
        match self.position.parse() {
            Ok(position) => (position, vec![]),
            Err(_) => (
                PositionChoice::Random,
                vec![ConfigIssue::invalid_value(
                    "debate.position",
                    &self.position,
                    &["pro", "con", "random"],
                )],
            ),
        }
    }
}
