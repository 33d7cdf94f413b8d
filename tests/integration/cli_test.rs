//! Integration tests for the CLI surface.

use crate::helpers::{run_vdeck, scratch_home};

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_exits_0_and_shows_usage() {
    let home = scratch_home();
    let (stdout, _stderr, exit_code) = run_vdeck(home.path(), &["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Terminal transport deck"));
    assert!(stdout.contains("[URL]"));
    assert!(stdout.contains("--hide-delay"));
    assert!(stdout.contains("--skip"));
    assert!(stdout.contains("config"));
    assert!(stdout.contains("completions"));
}

#[test]
fn version_prints_package_version() {
    let home = scratch_home();
    let (stdout, _stderr, exit_code) = run_vdeck(home.path(), &["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("vdeck "));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_help_lists_actions() {
    let home = scratch_home();
    let (stdout, _stderr, exit_code) = run_vdeck(home.path(), &["config", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("show"));
    assert!(stdout.contains("edit"));
    assert!(stdout.contains("migrate"));
}

// ============================================================================
// Argument Errors
// ============================================================================

#[test]
fn unknown_flag_exits_2() {
    let home = scratch_home();
    let (_stdout, stderr, exit_code) = run_vdeck(home.path(), &["--definitely-not-a-flag"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("unexpected argument"));
}

// ============================================================================
// Config Commands
// ============================================================================

#[test]
fn config_show_prints_defaults_when_no_file_exists() {
    let home = scratch_home();
    let (stdout, stderr, exit_code) = run_vdeck(home.path(), &["config", "show"]);

    assert_eq!(exit_code, 0, "config show failed, stderr: {}", stderr);
    assert!(stdout.contains("[playback]"));
    assert!(stdout.contains("hide_delay_secs = 10.0"));
    assert!(stdout.contains("skip_secs = 10.0"));
    assert!(stdout.contains("[mpv]"));
    assert!(stdout.contains("binary = \"mpv\""));
    assert!(stdout.contains("[ui]"));
    assert!(stdout.contains("theme = \"dark\""));
}

#[test]
#[cfg(target_os = "linux")]
fn config_show_does_not_create_a_file() {
    use crate::helpers::config_file;

    let home = scratch_home();
    let (_stdout, _stderr, exit_code) = run_vdeck(home.path(), &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(!config_file(home.path()).exists());
}

#[test]
#[cfg(target_os = "linux")]
fn config_show_reflects_a_seeded_file() {
    use crate::helpers::write_config;

    let home = scratch_home();
    write_config(
        home.path(),
        "[playback]\nskip_secs = 25.0\n\n[ui]\ntheme = \"ocean\"\n",
    );

    let (stdout, _stderr, exit_code) = run_vdeck(home.path(), &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("skip_secs = 25.0"));
    assert!(stdout.contains("theme = \"ocean\""));
    // Unset fields fall back to defaults
    assert!(stdout.contains("hide_delay_secs = 10.0"));
}

#[test]
#[cfg(target_os = "linux")]
fn config_migrate_yes_creates_the_file_with_defaults() {
    use crate::helpers::config_file;

    let home = scratch_home();
    let (stdout, stderr, exit_code) = run_vdeck(home.path(), &["config", "migrate", "--yes"]);

    assert_eq!(exit_code, 0, "migrate failed, stderr: {}", stderr);
    assert!(stdout.contains("Config file created successfully."));

    let written = std::fs::read_to_string(config_file(home.path())).unwrap();
    assert!(written.contains("[playback]"));
    assert!(written.contains("hide_delay_secs"));
    assert!(written.contains("[mpv]"));
    assert!(written.contains("[ui]"));

    // A second run has nothing left to add
    let (stdout, _stderr, exit_code) = run_vdeck(home.path(), &["config", "migrate", "--yes"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("already up to date"));
}

#[test]
#[cfg(target_os = "linux")]
fn config_migrate_preserves_existing_values_and_comments() {
    use crate::helpers::{config_file, write_config};

    let home = scratch_home();
    write_config(
        home.path(),
        "# tuned for slow links\n[playback]\nskip_secs = 5.0\n",
    );

    let (stdout, _stderr, exit_code) = run_vdeck(home.path(), &["config", "migrate", "--yes"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("missing field(s)"));
    assert!(stdout.contains("+ hide_delay_secs"));
    assert!(stdout.contains("Config updated successfully."));

    let written = std::fs::read_to_string(config_file(home.path())).unwrap();
    assert!(written.contains("# tuned for slow links"));
    assert!(written.contains("skip_secs = 5.0"));
    assert!(written.contains("hide_delay_secs"));
    assert!(written.contains("tick_ms"));
    assert!(written.contains("[mpv]"));
    assert!(written.contains("[ui]"));
}

#[test]
#[cfg(target_os = "linux")]
fn config_migrate_without_yes_is_a_noop_when_not_interactive() {
    use crate::helpers::{config_file, write_config};

    let home = scratch_home();
    let seeded = "[playback]\nskip_secs = 5.0\n";
    write_config(home.path(), seeded);

    // stdin is not a TTY here, so the confirmation prompt declines
    let (stdout, _stderr, exit_code) = run_vdeck(home.path(), &["config", "migrate"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("use --yes"));
    assert!(stdout.contains("No changes made."));

    let written = std::fs::read_to_string(config_file(home.path())).unwrap();
    assert_eq!(written, seeded);
}

// ============================================================================
// Playback Preflight
// ============================================================================

#[test]
fn play_refuses_without_a_tty() {
    let home = scratch_home();
    let log_path = home.path().join("vdeck.log");
    let (_stdout, stderr, exit_code) = run_vdeck(
        home.path(),
        &["--log-file", log_path.to_str().unwrap()],
    );

    // Captured stdout is a pipe, so the preflight refuses before mpv is
    // ever spawned
    assert_eq!(exit_code, 1);
    assert!(
        stderr.contains("interactive terminal"),
        "Expected TTY refusal, got: {}",
        stderr
    );
    assert!(log_path.exists(), "--log-file should be honored");
}
