//! Output configuration from TOML (`[output]` section)

use debate_domain::{ConfigIssue, OutputFormat};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// "full", "verdict" or "json"
    pub format: String,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default().to_string(),
            color: true,
        }
    }
}

impl FileOutputConfig {
    pub fn parse_format(&self) -> (OutputFormat, Vec<ConfigIssue>) {
        match self.format.parse() {
            Ok(format) => (format, vec![]),
            Err(_) => (
                OutputFormat::Full,
                vec![ConfigIssue::invalid_value(
                    "output.format",
                    &self.format,
                    &["full", "verdict", "json"],
                )],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let toml_str = r#"
[output]
format = "json"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.parse_format(), (OutputFormat::Json, vec![]));
        assert!(config.output.color);
    }

    #[test]
    fn test_unknown_format_falls_back_to_full() {
        let config = FileOutputConfig {
            format: "yaml".to_string(),
            color: false,
        };
        let (format, issues) = config.parse_format();
        assert_eq!(format, OutputFormat::Full);
        assert_eq!(issues.len(), 1);
    }
}
