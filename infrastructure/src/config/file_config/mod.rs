//! Raw TOML configuration data types
//!
//! These structs mirror the config file. Enum-valued settings are kept as
//! strings and parsed on demand so that a bad value becomes a reported
//! [`ConfigIssue`] with a fallback instead of a load failure.

mod debate;
mod logging;
mod output;
mod provider;

pub use debate::FileDebateConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;

use debate_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when validation finds at least one error-severity issue
#[derive(Debug, Error)]
#[error("invalid configuration: {}", join_messages(.issues))]
pub struct ConfigValidationError {
    pub issues: Vec<ConfigIssue>,
}

fn join_messages(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub provider: FileProviderConfig,
    pub debate: FileDebateConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.provider.issues();
        issues.extend(self.debate.parse_mode().1);
        issues.extend(self.debate.parse_position().1);
        issues.extend(self.output.parse_format().1);
        issues
    }

    /// Like [`validate`](Self::validate), but fails on error-severity issues
    /// and returns the remaining warnings.
    pub fn check(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(ConfigIssue::is_error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError { issues: errors })
        }
    }
}
