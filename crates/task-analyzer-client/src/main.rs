/*
[INPUT]:  CLI arguments, YAML configuration file, environment overrides
[OUTPUT]: Interactive TUI session or headless analysis/config commands
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

mod cli;
mod tui;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use task_analyzer_client::{AnalyzerSession, AppConfig};

use crate::tui::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory};

#[derive(Parser, Debug)]
#[command(name = "task-analyzer", version, about = "Build task lists and rank them with the analysis service")]
struct Cli {
    /// YAML config file; defaults to the per-user config directory
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    /// Overrides service.base_url from the config
    #[arg(long = "base-url", value_name = "URL", global = true)]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    /// Also append logs to this file
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive terminal UI (default)
    Tui,
    /// Load a JSON task array and print the prioritized result
    Analyze {
        #[arg(long, value_name = "PATH")]
        file: PathBuf,
        #[arg(long, value_name = "NAME")]
        strategy: Option<String>,
        /// Print the raw service response instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Write a config file interactively
    Init {
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Ask the service for its strategy suggestion
    Check {
        #[arg(long, value_name = "NAME")]
        strategy: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Command::Init { output }) = &args.command {
        let output = match output.clone().or_else(AppConfig::default_path) {
            Some(path) => path,
            None => return Err(anyhow!("no config directory; pass --output")),
        };
        return cli::init::run_init(output);
    }

    let mut config = AppConfig::load(args.config_path.as_deref()).context("load config")?;
    if let Some(base_url) = &args.base_url {
        config.service.base_url = base_url.clone();
    }

    match args.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let log_buffer: LogBufferHandle =
                Arc::new(Mutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
            let _guard = init_tracing(
                &args.log_level,
                args.log_file.as_deref(),
                Some(log_buffer.clone()),
            )?;
            info!(base_url = %config.service.base_url, "starting task-analyzer");

            let client = config.build_client()?;
            let session = AnalyzerSession::new(config.default_strategy(), config.notice_ttl());
            tui::run_tui_with_log(session, Arc::new(client), log_buffer).await
        }
        Command::Analyze {
            file,
            strategy,
            json,
        } => {
            let _guard = init_tracing(&args.log_level, args.log_file.as_deref(), None)?;
            cli::analyze::run_analyze(&config, &file, strategy, json).await
        }
        Command::Check { strategy } => {
            let _guard = init_tracing(&args.log_level, args.log_file.as_deref(), None)?;
            cli::analyze::run_check(&config, strategy).await
        }
        Command::Init { .. } => Ok(()),
    }
}

/// Stderr (or the TUI log buffer) plus an optional log file. The returned
/// guard flushes the file writer on drop.
fn init_tracing(
    log_level: &str,
    log_file: Option<&std::path::Path>,
    tui_buffer: Option<LogBufferHandle>,
) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let (buffer_layer, stderr_layer) = match tui_buffer {
        Some(buffer) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(LogWriterFactory::new(buffer)),
            ),
            None,
        ),
        None => (
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(buffer_layer)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}
