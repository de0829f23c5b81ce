//! Line-editor loop for human-vs-model debates

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use debate_application::{
    CompletionProvider, DebateError, DebateOrchestrator, DebateProgressNotifier, EndDebateOutput,
    NoDebateProgress, TranscriptStore,
};
use debate_domain::{DebateSession, UserId};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;

const HISTORY_CAPACITY: usize = 500;

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Argument(String),
    End,
    Transcript,
    Stats,
    Help,
    Quit,
    Unknown(String),
    Empty,
}

impl ReplInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ReplInput::Empty;
        }
        if !line.starts_with('/') {
            return ReplInput::Argument(line.to_string());
        }
        match line {
            "/end" | "/judge" => ReplInput::End,
            "/transcript" | "/t" => ReplInput::Transcript,
            "/stats" => ReplInput::Stats,
            "/help" | "/h" | "/?" => ReplInput::Help,
            "/quit" | "/exit" | "/q" => ReplInput::Quit,
            other => ReplInput::Unknown(other.to_string()),
        }
    }
}

/// How the REPL finished
#[derive(Debug)]
pub enum ReplExit {
    /// The debate was judged
    Judged(Box<EndDebateOutput>),
    /// The user left without judging; the session stays active
    Quit,
}

/// Interactive debate against the model
pub struct DebateRepl<P: CompletionProvider + 'static, S: TranscriptStore + 'static> {
    orchestrator: DebateOrchestrator<P, S>,
    session: DebateSession,
    user: UserId,
    show_progress: bool,
}

impl<P: CompletionProvider + 'static, S: TranscriptStore + 'static> DebateRepl<P, S> {
    pub fn new(orchestrator: DebateOrchestrator<P, S>, session: DebateSession, user: UserId) -> Self {
        Self {
            orchestrator,
            session,
            user,
            show_progress: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    fn line_editor() -> Reedline {
        let editor = Reedline::create();
        let Some(path) = dirs::data_dir().map(|p| p.join("llm-debate").join("history.txt")) else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(_) => editor,
        }
    }

    fn prompt(&self) -> DefaultPrompt {
        let side = self
            .session
            .seating()
            .human_position()
            .map(|p| p.label().to_string())
            .unwrap_or_else(|| "debate".to_string());
        DefaultPrompt::new(
            DefaultPromptSegment::Basic(side),
            DefaultPromptSegment::Empty,
        )
    }

    /// Run until the debate is judged or the user quits
    pub async fn run(&self) -> io::Result<ReplExit> {
        let mut editor = Self::line_editor();
        let prompt = self.prompt();

        self.print_welcome();

        loop {
            let line = match editor.read_line(&prompt)? {
                Signal::Success(line) => line,
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                _ => return Ok(ReplExit::Quit),
            };

            match ReplInput::parse(&line) {
                ReplInput::Empty => continue,
                ReplInput::Argument(text) => self.argue(&text).await,
                ReplInput::End => {
                    if let Some(output) = self.judge().await {
                        return Ok(ReplExit::Judged(Box::new(output)));
                    }
                }
                ReplInput::Transcript => self.show_transcript().await,
                ReplInput::Stats => self.show_stats().await,
                ReplInput::Help => Self::print_help(),
                ReplInput::Quit => {
                    println!("Leaving without a verdict.");
                    return Ok(ReplExit::Quit);
                }
                ReplInput::Unknown(cmd) => {
                    println!("Unknown command: {}", cmd);
                    println!("Type /help for available commands");
                }
            }
        }
    }

    fn progress(&self) -> Box<dyn DebateProgressNotifier> {
        if self.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoDebateProgress)
        }
    }

    async fn argue(&self, text: &str) {
        let progress = self.progress();
        match self
            .orchestrator
            .exchange_turn_with_progress(self.session.id(), text, progress.as_ref())
            .await
        {
            Ok(output) => {
                if let Some(reply) =
                    ConsoleFormatter::format_message(self.session.seating(), &output.model_message)
                {
                    println!("{}", reply);
                }
            }
            Err(e) => Self::print_error(&e),
        }
    }

    async fn judge(&self) -> Option<EndDebateOutput> {
        let progress = self.progress();
        match self
            .orchestrator
            .end_with_progress(self.session.id(), progress.as_ref())
            .await
        {
            Ok(output) => Some(output),
            Err(e) => {
                Self::print_error(&e);
                None
            }
        }
    }

    async fn show_transcript(&self) {
        match self.orchestrator.debate_detail(self.session.id()).await {
            Ok(detail) => println!("{}", ConsoleFormatter::format_transcript(&detail)),
            Err(e) => Self::print_error(&e),
        }
    }

    async fn show_stats(&self) {
        match self.orchestrator.user_stats(self.user).await {
            Ok(stats) => print!("{}", ConsoleFormatter::format_stats(&stats)),
            Err(e) => Self::print_error(&e),
        }
    }

    fn print_error(error: &DebateError) {
        eprintln!("{} [{}] {}", "Error:".red().bold(), error.kind(), error);
    }

    fn print_welcome(&self) {
        println!();
        println!("Make your argument and press Enter. The model answers each one.");
        println!(
            "Type {} when you are done to have the debate judged.",
            "/end".cyan()
        );
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /end, /judge        - End the debate and get a verdict");
        println!("  /transcript, /t     - Show the debate so far");
        println!("  /stats              - Show your win/loss record");
        println!("  /help, /h, /?       - Show this help");
        println!("  /quit, /exit, /q    - Leave without judging");
        println!();
    }
}
