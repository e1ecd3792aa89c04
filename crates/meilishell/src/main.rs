//! Meilishell - interactive shell for Meilisearch.
//!
//! Main entry point.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use meilishell::repl::{HistoryOptions, Repl};
use meilishell::{Console, ConnectOptions, Session};
use meilishell_config::{LoadedConfig, load_config_with_options, xdg_config_dir};
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Interactive shell for the Meilisearch administrative API
#[derive(Parser)]
#[command(name = "meilishell")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Meilisearch URL (default: http://localhost:7700)
    #[arg(long, env = "MEILISHELL_HOST")]
    pub host: Option<String>,

    /// API key or master key
    #[arg(long, env = "MEILISHELL_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Directory holding config.toml, history and logs
    #[arg(long, env = "MEILISHELL_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Do not load or save command history
    #[arg(long)]
    pub no_history: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config_dir = cli.config_dir.clone().or_else(xdg_config_dir);
    let _guard = init_tracing(cli.verbose, config_dir.as_deref());

    let loaded = load_config_with_options(None, config_dir.as_deref())
        .context("failed to load configuration")?;
    let options = connect_options(&cli, &loaded);

    let session = match Session::connect(&options).await {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut console = Console::stdout();
    console.clear()?;
    console.block(&session.banner())?;

    let history = HistoryOptions {
        file: if cli.no_history || !loaded.config.history_enabled() {
            None
        } else {
            loaded.config.history_file(loaded.config_dir.as_deref())
        },
        max_entries: loaded.config.history_max_entries(),
    };

    let mut repl = Repl::new(session, history).context("failed to start line editor")?;
    repl.run().await.context("line editor failed")?;
    Ok(ExitCode::SUCCESS)
}

/// Flags and environment win over config files, which win over defaults.
fn connect_options(cli: &Cli, loaded: &LoadedConfig) -> ConnectOptions {
    let config = &loaded.config;
    ConnectOptions {
        host: cli
            .host
            .clone()
            .unwrap_or_else(|| config.host().to_string()),
        api_key: cli
            .api_key
            .clone()
            .or_else(|| config.api_key().map(str::to_string)),
        timeout: cli
            .timeout
            .map(Duration::from_secs)
            .unwrap_or_else(|| config.timeout()),
    }
}

/// Console layer on stderr plus, when a config directory is known, a daily
/// JSON log under `<config dir>/logs`. A log directory that cannot be created
/// drops the file layer with a warning.
fn init_tracing(verbose: bool, config_dir: Option<&Path>) -> Option<WorkerGuard> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::prelude::*;

    let filter = if verbose {
        "meilishell=debug,meilishell_client=debug,meilishell_config=debug,warn"
    } else {
        "warn"
    };

    let mut file_error = None;
    let appender = config_dir.map(|dir| dir.join("logs")).and_then(|log_dir| {
        RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("meilishell.log")
            .build(&log_dir)
            .map_err(|e| file_error = Some(format!("{}: {}", log_dir.display(), e)))
            .ok()
    });

    let (file_layer, guard) = match appender {
        Some(appender) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    "meilishell=debug,meilishell_client=debug,meilishell_config=debug,info",
                ));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        warn!("file logging disabled, cannot open log directory {}", e);
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use meilishell_config::ShellConfig;

    fn loaded(toml: &str) -> LoadedConfig {
        LoadedConfig {
            config: ShellConfig::from_toml(toml).unwrap(),
            config_dir: None,
            sources: Vec::new(),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(["meilishell", "--host", "http://flag:7700", "--timeout", "3"]);
        let options = connect_options(
            &cli,
            &loaded("[connection]\nhost = \"http://file:7700\"\napi_key = \"k\"\ntimeout_secs = 9\n"),
        );
        assert_eq!(options.host, "http://flag:7700");
        assert_eq!(options.api_key.as_deref(), Some("k"));
        assert_eq!(options.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_zero_timeout_flag_rejected() {
        let result = Cli::try_parse_from(["meilishell", "--timeout", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_without_config() {
        let cli = Cli::parse_from(["meilishell"]);
        let options = connect_options(&cli, &loaded(""));
        assert_eq!(options.timeout, Duration::from_secs(30));
    }
}
