//! Presentation layer for llm-debate
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive debate prompt.

pub mod cli;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, FormatArg, ModeArg, PositionArg};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
pub use repl::{DebateRepl, ReplExit};
