//! Generated debate topics

use crate::completion::ResponseSchema;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Schema name sent with topic generation requests
pub const TOPIC_SCHEMA_NAME: &str = "debate_topic";

/// A motion together with what each side argues
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicBrief {
    pub topic: String,
    pub pro_position: String,
    pub con_position: String,
    pub background: String,
}

impl TopicBrief {
    /// Parse schema-constrained provider output.
    ///
    /// A blank `topic` is rejected: a session cannot be created around it.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let brief: TopicBrief = serde_json::from_str(raw.trim())
            .map_err(|e| DomainError::MalformedTopic(e.to_string()))?;
        if brief.topic.trim().is_empty() {
            return Err(DomainError::MalformedTopic("topic is empty".to_string()));
        }
        Ok(brief)
    }
}

/// JSON schema for topic generation
pub fn topic_schema() -> ResponseSchema {
    ResponseSchema::new(
        TOPIC_SCHEMA_NAME,
        json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "The motion under debate"
                },
                "pro_position": {
                    "type": "string",
                    "description": "What the side in favour argues"
                },
                "con_position": {
                    "type": "string",
                    "description": "What the side against argues"
                },
                "background": {
                    "type": "string",
                    "description": "Context and why the motion matters"
                }
            },
            "required": ["topic", "pro_position", "con_position", "background"],
            "additionalProperties": false
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_brief() {
        let raw = r#"{
            "topic": "Remote work should be the default",
            "pro_position": "It improves focus",
            "con_position": "It weakens teams",
            "background": "Post-pandemic offices"
        }"#;
        let brief = TopicBrief::parse(raw).unwrap();
        assert_eq!(brief.topic, "Remote work should be the default");
        assert_eq!(brief.con_position, "It weakens teams");
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let raw = r#"{"topic": "x", "pro_position": "a", "con_position": "b"}"#;
        assert!(matches!(
            TopicBrief::parse(raw),
            Err(DomainError::MalformedTopic(_))
        ));
    }

    #[test]
    fn test_parse_rejects_blank_topic() {
        let raw = r#"{"topic": "  ", "pro_position": "a", "con_position": "b", "background": "c"}"#;
        assert!(TopicBrief::parse(raw).is_err());
    }

    #[test]
    fn test_schema_requires_all_fields() {
        let schema = topic_schema();
        assert_eq!(schema.name, TOPIC_SCHEMA_NAME);
        assert_eq!(schema.schema["required"].as_array().unwrap().len(), 4);
        assert_eq!(schema.schema["additionalProperties"], false);
    }
}
