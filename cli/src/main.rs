//! CLI entrypoint for llm-debate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use debate_application::{
    CompletionProvider, CreateDebateInput, DebateDetail, DebateOrchestrator,
    DebateProgressNotifier, NoDebateProgress, TranscriptStore,
};
use debate_domain::{DebateMode, DebateSession, OutputFormat, PositionChoice, UserId};
use debate_infrastructure::{
    ConfigLoader, FileConfig, InMemoryTranscriptStore, JsonlConversationLogger,
    OpenAiCompletionProvider, OpenAiSettings,
};
use debate_presentation::{Cli, ConsoleFormatter, DebateRepl, ProgressReporter, ReplExit};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber, plus a file writer when `--log-file` is set
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let (file_layer, guard) = match &cli.log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("--log-file has no file name: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("cannot create log directory {}", dir.display()))?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };

    for issue in config.check()? {
        warn!("{}", issue.message);
    }
    Ok(config)
}

fn progress(quiet: bool) -> Box<dyn DebateProgressNotifier> {
    if quiet {
        Box::new(NoDebateProgress)
    } else {
        Box::new(ProgressReporter::new())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = load_config(&cli)?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // CLI flags take precedence over config values
    let mode: DebateMode = match cli.mode {
        Some(mode) => mode.into(),
        None => config.debate.parse_mode().0,
    };
    let position: PositionChoice = match cli.position {
        Some(position) => position.into(),
        None => config.debate.parse_position().0,
    };
    let format: OutputFormat = match cli.format {
        Some(format) => format.into(),
        None => config.output.parse_format().0,
    };

    let Some(api_key) = config.provider.resolve_api_key() else {
        bail!(
            "No API key found. Set {} or provider.api_key in debate.toml.",
            config.provider.api_key_env
        );
    };

    info!(model = %config.provider.model, mode = %mode, "Starting llm-debate");

    // === Dependency Injection ===
    let provider = Arc::new(OpenAiCompletionProvider::new(OpenAiSettings {
        base_url: config.provider.base_url.clone(),
        api_key,
        model: config.provider.model.clone(),
        max_tokens: config.provider.max_tokens,
    })?);

    let store = Arc::new(InMemoryTranscriptStore::new());
    let user = UserId(cli.user);
    store.register_user(user).await;

    let mut orchestrator = DebateOrchestrator::new(provider, store);
    if let Some(logger) = config
        .logging
        .conversation_log_path()
        .and_then(JsonlConversationLogger::new)
    {
        info!(path = %logger.path().display(), "Writing debate log");
        orchestrator = orchestrator.with_conversation_logger(Arc::new(logger));
    }

    // Build input
    let mut input = CreateDebateInput::new(mode).with_position(position);
    if mode == DebateMode::HumanVsModel {
        input = input.with_owner(user);
    }
    if let Some(topic) = &cli.topic {
        input = input.with_topic(topic.clone());
    }
    if cli.random_topic {
        input = input.randomize_topic();
    }
    if cli.random_position {
        input = input.randomize_position();
    }

    let created = orchestrator
        .create_with_progress(input, progress(cli.quiet).as_ref())
        .await?;

    if format != OutputFormat::Json {
        println!(
            "{}",
            ConsoleFormatter::format_created(&created.session, created.topic_brief.as_ref())
        );
    }

    match mode {
        DebateMode::HumanVsModel => {
            run_human_debate(&orchestrator, created.session, user, format, cli.quiet).await
        }
        DebateMode::ModelVsModel => {
            let token = CancellationToken::new();
            let ctrl_c = token.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    ctrl_c.cancel();
                }
            });
            let orchestrator = orchestrator.with_cancellation(token);
            run_model_debate(&orchestrator, &created.session, format, cli.quiet).await
        }
    }
}

async fn run_human_debate<P, S>(
    orchestrator: &DebateOrchestrator<P, S>,
    session: DebateSession,
    user: UserId,
    format: OutputFormat,
    quiet: bool,
) -> Result<()>
where
    P: CompletionProvider + 'static,
    S: TranscriptStore + 'static,
{
    let session_id = session.id();
    let repl = DebateRepl::new(orchestrator.clone(), session, user).with_progress(!quiet);

    let output = match repl.run().await? {
        ReplExit::Judged(output) => output,
        ReplExit::Quit => {
            info!(session_id = %session_id, "Left debate without a verdict");
            return Ok(());
        }
    };

    let detail: DebateDetail = orchestrator.debate_detail(session_id).await?;
    println!("{}", ConsoleFormatter::render(format, &detail, &output.verdict));

    if format != OutputFormat::Json {
        let stats = orchestrator.user_stats(user).await?;
        let history = orchestrator.user_history(user).await?;
        print!("{}", ConsoleFormatter::format_stats(&stats));
        print!("{}", ConsoleFormatter::format_history(&history));
    }
    Ok(())
}

async fn run_model_debate<P, S>(
    orchestrator: &DebateOrchestrator<P, S>,
    session: &DebateSession,
    format: OutputFormat,
    quiet: bool,
) -> Result<()>
where
    P: CompletionProvider + 'static,
    S: TranscriptStore + 'static,
{
    // Full output streams turns as they arrive, then adds only the verdict
    let stream = format == OutputFormat::Full;
    let progress = progress(quiet);

    loop {
        let step = orchestrator
            .advance_step_with_progress(session.id(), progress.as_ref())
            .await?;
        if stream
            && let Some(text) = step
                .message
                .as_ref()
                .and_then(|m| ConsoleFormatter::format_message(session.seating(), m))
        {
            println!("{}", text);
        }
        if step.finished {
            break;
        }
    }

    let output = orchestrator
        .end_with_progress(session.id(), progress.as_ref())
        .await?;

    if stream {
        println!(
            "{}",
            ConsoleFormatter::format_verdict(&output.session, &output.verdict)
        );
    } else {
        let detail = orchestrator.debate_detail(session.id()).await?;
        println!("{}", ConsoleFormatter::render(format, &detail, &output.verdict));
    }
    Ok(())
}
