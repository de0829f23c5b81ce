//! Prompt domain
//!
//! Builds the message lists sent to the completion provider for debaters,
//! the judge and topic generation.

pub mod assembler;
pub mod perspective;
mod template;

pub use assembler::{assemble_debater_prompt, assemble_judge_prompt, assemble_topic_prompt};
pub use perspective::{Perspective, PerspectiveTurn, reinterpret};
pub use template::DebatePromptTemplate;
