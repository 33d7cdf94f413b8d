//! Config subcommands handler

use anyhow::Result;
use std::fs;
use std::io::{self, BufRead, Write};

use vdeck::config::{migrate_config, MigrationResult};
use vdeck::tui::current_theme;
use vdeck::tui::theme::ansi;
use vdeck::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    // Ensure config exists
    if !config_path.exists() {
        let config = Config::default();
        config.save()?;
    }

    // Get editor from environment
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}

/// Migrate config file by adding missing fields.
///
/// Reads the existing config file (or empty if it doesn't exist),
/// adds any missing fields from the current default config,
/// shows a preview of changes, and prompts for confirmation unless
/// `yes` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate(yes: bool) -> Result<()> {
    let theme = current_theme();
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    // Read existing content (empty string if file doesn't exist)
    let content = if file_exists {
        fs::read_to_string(&config_path)?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;

    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    if file_exists {
        let summary = if result.sections_added.is_empty() {
            format!("Found {} missing field(s):", result.added_fields.len())
        } else {
            format!(
                "Found {} missing field(s) in {} new section(s):",
                result.added_fields.len(),
                result.sections_added.len()
            )
        };
        println!("{}", theme.primary_text(&summary));
    } else {
        println!(
            "{}",
            theme.primary_text("Config file does not exist. Will create with default settings.")
        );
    }
    println!();
    print_diff_preview(&result, !file_exists);
    println!();

    let prompt = if file_exists {
        format!("Apply these changes to {}?", config_path.display())
    } else {
        format!("Create {}?", config_path.display())
    };
    if !yes && !prompt_confirmation(&prompt)? {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config_path, &result.content)?;

    let done = if file_exists {
        "Config updated successfully."
    } else {
        "Config file created successfully."
    };
    println!("{}", theme.success_text(done));
    Ok(())
}

/// Print a diff-style preview of the config changes.
///
/// Added lines get a green `+` prefix; the header of an existing section
/// that gains fields is shown as plain context. For new files everything
/// is an addition.
fn print_diff_preview(result: &MigrationResult, is_new_file: bool) {
    let mut current_section = String::new();
    let mut header_pending: Option<String> = None;

    for line in result.content.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            current_section = trimmed[1..trimmed.len() - 1].to_string();
            header_pending = Some(line.to_string());
            continue;
        }
        if trimmed.is_empty() {
            continue;
        }

        let key = trimmed.split('=').next().map(str::trim).unwrap_or("");
        let added = is_new_file
            || (!key.is_empty()
                && result
                    .added_fields
                    .contains(&format!("{}.{}", current_section, key)));
        if !added {
            continue;
        }

        if let Some(header) = header_pending.take() {
            if is_new_file || result.sections_added.contains(&current_section) {
                println!("{}+ {}{}", ansi::GREEN, header, ansi::RESET);
            } else {
                println!("  {}", header);
            }
        }
        println!("{}+ {}{}", ansi::GREEN, line, ansi::RESET);
    }
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(message: &str) -> Result<bool> {
    let theme = current_theme();

    // Check if stdin is a TTY - if not, skip prompt and return false
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
