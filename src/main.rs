//! vdeck binary entry point.
//!
//! Parses the command line, initializes logging (a file when playing,
//! stderr otherwise; the deck owns the terminal during playback) and
//! dispatches to the command handlers.

mod commands;

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use vdeck::cli::{Cli, Commands, ConfigAction};

#[cfg(not(tarpaulin_include))]
fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(not(tarpaulin_include))]
fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => {
            init_file_logging(cli.log_file.as_deref())?;
            commands::play::handle_play(cli.url, cli.mpv, cli.hide_delay, cli.skip)
        }
        Some(command) => {
            init_stderr_logging();
            match command {
                Commands::Config { action } => match action {
                    ConfigAction::Show => commands::config::handle_show(),
                    ConfigAction::Edit => commands::config::handle_edit(),
                    ConfigAction::Migrate { yes } => commands::config::handle_migrate(yes),
                },
                Commands::Completions { shell } => {
                    commands::completions::handle_completions(shell)
                }
            }
        }
    }
}

fn env_filter() -> EnvFilter {
    // RUST_LOG takes precedence over the info default
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

/// Log to a file while the deck owns the terminal.
fn init_file_logging(log_file: Option<&Path>) -> Result<()> {
    let path = match log_file {
        Some(path) => path.to_path_buf(),
        None => default_log_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Default log location: `<state_dir>/vdeck/vdeck-YYYYMMDD.log`.
fn default_log_path() -> Result<PathBuf> {
    let base = dirs::state_dir()
        .or_else(dirs::cache_dir)
        .context("Could not determine a log directory")?;
    let name = format!("vdeck-{}.log", chrono::Local::now().format("%Y%m%d"));
    Ok(base.join("vdeck").join(name))
}
