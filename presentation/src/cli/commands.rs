//! CLI command definitions

use clap::{Parser, ValueEnum};
use debate_domain::{DebateMode, OutputFormat, PositionChoice};
use std::path::PathBuf;

/// Who debates whom
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// You argue one side against the model
    Human,
    /// Two model agents argue for five turns each
    Model,
}

impl From<ModeArg> for DebateMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Human => DebateMode::HumanVsModel,
            ModeArg::Model => DebateMode::ModelVsModel,
        }
    }
}

/// Side you argue in a human-vs-model debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PositionArg {
    Pro,
    Con,
    Random,
}

impl From<PositionArg> for PositionChoice {
    fn from(arg: PositionArg) -> Self {
        match arg {
            PositionArg::Pro => PositionChoice::Pro,
            PositionArg::Con => PositionChoice::Con,
            PositionArg::Random => PositionChoice::Random,
        }
    }
}

/// How the finished debate is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Transcript and full verdict
    Full,
    /// Verdict only
    Verdict,
    /// Machine-readable JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Full => OutputFormat::Full,
            FormatArg::Verdict => OutputFormat::Verdict,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for llm-debate
#[derive(Parser, Debug)]
#[command(name = "llm-debate")]
#[command(author, version, about = "Debate an LLM, or watch two LLMs debate, and get a judged verdict")]
#[command(long_about = r#"
llm-debate runs structured debates against an OpenAI-compatible model.

Human vs model: you argue one side in an interactive prompt, the model argues
the other. Type /end to have a judge score the debate.

Model vs model: two agents alternate, pro first, for five turns each, then a
judge scores the debate.

Configuration files are loaded from (in priority order):
1. DEBATE_* environment variables (e.g. DEBATE_PROVIDER__MODEL)
2. --config <path>     Explicit config file
3. ./debate.toml       Project-level config
4. ~/.config/llm-debate/config.toml   Global config

Example:
  llm-debate "Cities should ban private cars" --position pro
  llm-debate --mode model --random-topic -f verdict
"#)]
pub struct Cli {
    /// Motion to debate; a topic is generated when omitted
    pub topic: Option<String>,

    /// Debate mode (default from config, else human)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Your side in a human-vs-model debate (default from config, else random)
    #[arg(short, long, value_enum)]
    pub position: Option<PositionArg>,

    /// Ignore TOPIC and let the model propose one
    #[arg(long)]
    pub random_topic: bool,

    /// Draw your side at random even if --position is given
    #[arg(long)]
    pub random_position: bool,

    /// Output format for the finished debate
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Local user id that owns human-vs-model debates
    #[arg(long, value_name = "ID", default_value_t = 1)]
    pub user: i64,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Also write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
