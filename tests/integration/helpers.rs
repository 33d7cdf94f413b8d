//! Shared helpers for the integration tests.

use std::cell::RefCell;
use std::path::Path;
use std::process::Command;
use std::rc::Rc;

use tempfile::TempDir;

use vdeck::handle::{HandleError, PlayerHandle};

// ============================================================================
// CLI Runner
// ============================================================================

/// Run the vdeck binary with config and state dirs redirected into `home`,
/// returning (stdout, stderr, exit code).
pub fn run_vdeck(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_vdeck"))
        .args(args)
        .env("NO_COLOR", "1")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_STATE_HOME", home.join("state"))
        .output()
        .expect("Failed to execute vdeck");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Fresh scratch home directory for one test.
pub fn scratch_home() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Where the config file lands inside a scratch home (Linux layout).
#[cfg(target_os = "linux")]
pub fn config_file(home: &Path) -> std::path::PathBuf {
    home.join("config").join("vdeck").join("config.toml")
}

/// Seed a config file inside the scratch home.
#[cfg(target_os = "linux")]
pub fn write_config(home: &Path, content: &str) {
    let path = config_file(home);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

// ============================================================================
// Scripted Player
// ============================================================================

/// A command the session issued to the player.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    Play,
    Pause,
    Seek(f64),
}

/// State the test scripts and the log of what the session sent.
#[derive(Default)]
pub struct PlayerScript {
    pub position: Option<f64>,
    pub duration: Option<f64>,
    pub rate: f64,
    pub error: Option<String>,
    pub issued: Vec<PlayerCommand>,
    pub shutdown_calls: usize,
}

#[derive(Clone, Default)]
struct Observed {
    position: Option<f64>,
    duration: Option<f64>,
    rate: f64,
    error: Option<String>,
}

/// Scripted stand-in for the mpv adapter. Commands land in the script's log
/// immediately; state written to the script becomes visible to the session
/// on its next poll, the same staging the real adapter has.
pub struct ScriptedPlayer {
    script: Rc<RefCell<PlayerScript>>,
    observed: Observed,
}

impl ScriptedPlayer {
    pub fn new() -> (Self, Rc<RefCell<PlayerScript>>) {
        let script = Rc::new(RefCell::new(PlayerScript::default()));
        let player = Self {
            script: script.clone(),
            observed: Observed::default(),
        };
        (player, script)
    }
}

impl PlayerHandle for ScriptedPlayer {
    fn play(&mut self) -> Result<(), HandleError> {
        self.script.borrow_mut().issued.push(PlayerCommand::Play);
        Ok(())
    }

    fn pause(&mut self) -> Result<(), HandleError> {
        self.script.borrow_mut().issued.push(PlayerCommand::Pause);
        Ok(())
    }

    fn seek(&mut self, seconds: f64) -> Result<(), HandleError> {
        self.script
            .borrow_mut()
            .issued
            .push(PlayerCommand::Seek(seconds));
        Ok(())
    }

    fn position(&self) -> Option<f64> {
        self.observed.position
    }

    fn duration(&self) -> Option<f64> {
        self.observed.duration
    }

    fn rate(&self) -> f64 {
        self.observed.rate
    }

    fn error(&self) -> Option<&str> {
        self.observed.error.as_deref()
    }

    fn poll(&mut self) -> Result<(), HandleError> {
        let script = self.script.borrow();
        self.observed = Observed {
            position: script.position,
            duration: script.duration,
            rate: script.rate,
            error: script.error.clone(),
        };
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), HandleError> {
        self.script.borrow_mut().shutdown_calls += 1;
        Ok(())
    }
}
