//! OpenAI-compatible Chat Completions provider

mod adapter;
mod types;

pub use adapter::{OpenAiCompletionProvider, OpenAiSettings};
