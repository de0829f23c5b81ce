//! Prompt templates for debaters, the judge and topic generation

use crate::debate::entities::{Position, Seating};
use crate::debate::message::{DebateMessage, Role};
use crate::debate::topic::TopicBrief;

/// Templates for generating prompts at each stage of a debate
pub struct DebatePromptTemplate;

impl DebatePromptTemplate {
    /// System prompt for a debater arguing `position`
    pub fn debater_system(topic: &str, position: Position) -> String {
        format!(
            r#"You are a participant in a formal debate.
Topic: {topic}
Your side: {side} ({stance})

Follow these rules:
1. Argue your assigned position logically and consistently
2. Rebut your opponent's points directly
3. Support your arguments with concrete examples, evidence or data
4. Remain civil and constructive
5. Keep each response concise (around 150 words)"#,
            side = position.label(),
            stance = Self::stance(position),
        )
    }

    /// System prompt for the judge
    pub fn judge_system(topic: &str) -> String {
        format!(
            r#"You are an impartial debate judge.
Evaluate the debate below and decide the winner.

Topic: {topic}
Pro: argues in favour of the motion
Con: argues against the motion

Criteria:
1. Logical coherence: are the arguments internally consistent?
2. Evidentiary support: are claims backed by concrete evidence or data?
3. Rebuttal quality: does each side answer the other's points effectively?
4. Clarity: is the argument expressed clearly and persuasively?

Judge both sides fairly. Declare a draw only if neither side is clearly stronger."#
        )
    }

    /// The single user turn handed to the judge.
    ///
    /// Briefing and earlier judge messages are left out; each remaining
    /// message is attributed to its side label.
    pub fn judge_transcript(seating: &Seating, messages: &[DebateMessage]) -> String {
        let mut prompt = String::from("Debate transcript:\n");

        for message in messages {
            let Some(label) = Self::speaker_label(seating, message.role) else {
                continue;
            };
            prompt.push_str(&format!("\n[{}]\n{}\n", label, message.content));
        }

        prompt.push_str("\nEvaluate the debate above.");
        prompt
    }

    /// Human-readable side label for a transcript role, e.g. "Pro (Human)".
    ///
    /// `None` for roles that take no part in the argument.
    pub fn speaker_label(seating: &Seating, role: Role) -> Option<String> {
        let speaker = match role {
            Role::Human => "Human",
            Role::Model => "AI",
            Role::Agent1 => "AI-1",
            Role::Agent2 => "AI-2",
            Role::System | Role::Judge => return None,
        };
        let side = match seating.position_of(role) {
            Some(position) => position.label(),
            None => "Unseated",
        };
        Some(format!("{} ({})", side, speaker))
    }

    /// System prompt for topic generation
    pub fn topic_system() -> &'static str {
        r#"You suggest topics for debates.
Propose a motion that is interesting, genuinely contested and arguable from both sides.
Keep it concrete enough that a non-specialist can take part.
Draw on a range of fields such as politics, society, technology, ethics and education."#
    }

    /// User prompt for topic generation
    pub fn topic_request() -> &'static str {
        "Suggest one new debate topic."
    }

    /// Briefing stored as a session's first message
    pub fn briefing(topic: &str, brief: Option<&TopicBrief>) -> String {
        let mut content = format!("Debate topic: {}\n", topic);
        if let Some(brief) = brief {
            content.push_str(&format!(
                "Pro position: {}\nCon position: {}\nBackground: {}",
                brief.pro_position, brief.con_position, brief.background
            ));
        }
        content
    }

    fn stance(position: Position) -> &'static str {
        match position {
            Position::Pro => "in favour of the motion",
            Position::Con => "against the motion",
        }
    }
}
