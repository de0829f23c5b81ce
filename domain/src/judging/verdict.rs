//! Structured judge output

use crate::completion::ResponseSchema;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Schema name sent with judging requests
pub const VERDICT_SCHEMA_NAME: &str = "judge_result";

/// Highest score the judge may award a side
pub const MAX_SCORE: u32 = 100;

/// Winning side as named by the judge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictWinner {
    Pro,
    Con,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Score {
    pub pro: u32,
    pub con: u32,
}

/// The judge's full assessment of a debate (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Verdict {
    pub winner: VerdictWinner,
    pub score: Score,
    pub reasoning: String,
    pub pro_strengths: Vec<String>,
    pub pro_weaknesses: Vec<String>,
    pub con_strengths: Vec<String>,
    pub con_weaknesses: Vec<String>,
    pub final_comment: String,
}

impl Verdict {
    /// Parse schema-constrained provider output.
    ///
    /// Anything that does not match the verdict schema exactly, including
    /// scores above [`MAX_SCORE`], is rejected.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let verdict: Verdict = serde_json::from_str(raw.trim())
            .map_err(|e| DomainError::MalformedVerdict(e.to_string()))?;

        if verdict.score.pro > MAX_SCORE || verdict.score.con > MAX_SCORE {
            return Err(DomainError::MalformedVerdict(format!(
                "score out of range: pro={}, con={}",
                verdict.score.pro, verdict.score.con
            )));
        }

        Ok(verdict)
    }

    /// Serialized form stored as the transcript's judge message
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// JSON schema for judging requests
pub fn verdict_schema() -> ResponseSchema {
    let string_list = |description: &str| {
        json!({
            "type": "array",
            "items": { "type": "string" },
            "description": description
        })
    };

    ResponseSchema::new(
        VERDICT_SCHEMA_NAME,
        json!({
            "type": "object",
            "properties": {
                "winner": {
                    "type": "string",
                    "enum": ["pro", "con", "draw"],
                    "description": "Winning side (pro, con, or draw)"
                },
                "score": {
                    "type": "object",
                    "properties": {
                        "pro": { "type": "integer", "description": "Pro side score (0-100)" },
                        "con": { "type": "integer", "description": "Con side score (0-100)" }
                    },
                    "required": ["pro", "con"],
                    "additionalProperties": false
                },
                "reasoning": {
                    "type": "string",
                    "description": "Detailed explanation of the decision"
                },
                "pro_strengths": string_list("What the pro side did well"),
                "pro_weaknesses": string_list("Where the pro side could improve"),
                "con_strengths": string_list("What the con side did well"),
                "con_weaknesses": string_list("Where the con side could improve"),
                "final_comment": {
                    "type": "string",
                    "description": "Closing remarks from the judge"
                }
            },
            "required": [
                "winner", "score", "reasoning",
                "pro_strengths", "pro_weaknesses",
                "con_strengths", "con_weaknesses",
                "final_comment"
            ],
            "additionalProperties": false
        }),
    )
}
