//! Repository build tasks, invoked as `cargo run -p xtask -- <command>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use vdeck::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask", about = "Build tasks for vdeck")]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for vdeck and its subcommands
    Man {
        /// Output directory for the generated pages
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = Cli::command();
    write_man_page(&cmd, None, out_dir)?;

    println!("Man pages written to {}", out_dir.display());
    Ok(())
}

/// Writes `<name>.1` for the command, then recurses into visible subcommands
/// as `<parent>-<sub>.1`.
fn write_man_page(cmd: &clap::Command, parent: Option<&str>, out_dir: &Path) -> Result<()> {
    let name = match parent {
        Some(parent) => format!("{parent}-{}", cmd.get_name()),
        None => cmd.get_name().to_string(),
    };

    let man = clap_mangen::Man::new(cmd.clone());
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)
        .with_context(|| format!("Failed to render man page for {name}"))?;

    let path = out_dir.join(format!("{name}.1"));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;

    for sub in cmd.get_subcommands().filter(|sub| !sub.is_hide_set()) {
        write_man_page(sub, Some(&name), out_dir)?;
    }

    Ok(())
}
