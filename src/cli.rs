//! Command line interface definitions.
//!
//! Running without a subcommand plays the given URL (or the configured
//! default). Subcommands cover configuration management and shell
//! completions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "vdeck",
    about = "Terminal transport deck for mpv",
    long_about = "Plays a video in an mpv window and puts the transport controls in your \
                  terminal: play/pause, seek slider, skip buttons, and an auto-hiding \
                  control overlay.",
    version = crate::version_string(),
    propagate_version = true
)]
pub struct Cli {
    /// Stream URL or file to play (defaults to the configured URL, then a
    /// built-in sample stream)
    pub url: Option<String>,

    /// mpv binary to launch
    #[arg(long, value_name = "BIN")]
    pub mpv: Option<String>,

    /// Seconds of inactivity before the controls auto-hide
    #[arg(long, value_name = "SECS")]
    pub hide_delay: Option<f64>,

    /// Seconds jumped by the skip buttons and arrow keys
    #[arg(long, value_name = "SECS")]
    pub skip: Option<f64>,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show current configuration as TOML
    Show,
    /// Open the config file in $EDITOR
    Edit,
    /// Add fields missing from the config file
    Migrate {
        /// Apply changes without prompting
        #[arg(long)]
        yes: bool,
    },
}
