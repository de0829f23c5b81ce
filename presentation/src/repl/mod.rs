//! Interactive debate prompt
//!
//! Provides a line-editor interface for human-vs-model debates.

mod debate_repl;

pub use debate_repl::{DebateRepl, ReplExit, ReplInput};
