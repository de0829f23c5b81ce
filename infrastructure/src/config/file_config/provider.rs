//! Provider configuration from TOML (`[provider]` section)

use debate_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL including the version segment
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Direct API key (prefer `api_key_env`)
    pub api_key: Option<String>,
    pub model: String,
    /// Cap on tokens per response; omitted from requests when unset
    pub max_tokens: Option<u32>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            max_tokens: Some(1024),
        }
    }
}

impl FileProviderConfig {
    /// The API key from the config file, else from `api_key_env`
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }

    pub(super) fn issues(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::empty("provider.model"));
        }
        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::empty("provider.base_url"));
        }
        if self.api_key.is_none() && self.api_key_env.trim().is_empty() {
            issues.push(ConfigIssue::empty("provider.api_key_env"));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_key_wins_over_env() {
        let config = FileProviderConfig {
            api_key: Some("sk-file".to_string()),
            api_key_env: "DEBATE_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("sk-file"));
    }

    #[test]
    fn test_missing_env_key_resolves_to_none() {
        let config = FileProviderConfig {
            api_key_env: "DEBATE_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..Default::default()
        };
        assert!(config.resolve_api_key().is_none());
    }

    #[test]
    fn test_empty_model_is_an_issue() {
        let config = FileProviderConfig {
            model: " ".to_string(),
            ..Default::default()
        };
        let issues = config.issues();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("provider.model"));
    }
}
