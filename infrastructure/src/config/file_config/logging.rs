//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL debate log; disabled when unset
    pub conversation_log: Option<String>,
}

impl FileLoggingConfig {
    /// The debate log path with a leading `~/` expanded
    pub fn conversation_log_path(&self) -> Option<PathBuf> {
        let raw = self.conversation_log.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_or_blank_disables_log() {
        assert!(FileLoggingConfig::default().conversation_log_path().is_none());
        let blank = FileLoggingConfig {
            conversation_log: Some("  ".to_string()),
        };
        assert!(blank.conversation_log_path().is_none());
    }

    #[test]
    fn test_plain_path_is_kept() {
        let config = FileLoggingConfig {
            conversation_log: Some("/tmp/debate.jsonl".to_string()),
        };
        assert_eq!(
            config.conversation_log_path(),
            Some(PathBuf::from("/tmp/debate.jsonl"))
        );
    }

    #[test]
    fn test_home_prefix_is_expanded() {
        let config = FileLoggingConfig {
            conversation_log: Some("~/debates/log.jsonl".to_string()),
        };
        if let Some(path) = config.conversation_log_path() {
            assert!(path.ends_with("debates/log.jsonl"));
            assert!(!path.starts_with("~"));
        }
    }
}
