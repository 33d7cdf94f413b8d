//! Configuration loading and migration.
//!
//! Config lives at `<config_dir>/vdeck/config.toml`. Every field has a
//! default and every struct is `#[serde(default)]`, so a partial file or no
//! file at all is fine. `migrate_config` upgrades an existing file in place
//! with toml_edit, which keeps the user's comments and formatting while
//! appending whatever fields a newer version introduced.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;

/// Built-in sample stream, used when neither the command line nor the
/// config names a URL.
pub const DEFAULT_MEDIA_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub mpv: MpvConfig,
    pub ui: UiConfig,
}

/// Transport behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Seconds of inactivity before the controls auto-hide.
    pub hide_delay_secs: f64,
    /// Seconds jumped by the skip buttons and arrow keys.
    pub skip_secs: f64,
    /// Sync tick interval in milliseconds.
    pub tick_ms: u64,
    /// URL to play when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_url: Option<String>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            hide_delay_secs: 10.0,
            skip_secs: 10.0,
            tick_ms: 10,
            default_url: None,
        }
    }
}

impl PlaybackConfig {
    /// Auto-hide delay as a `Duration`; negative values count as zero.
    pub fn hide_delay(&self) -> Duration {
        Duration::from_secs_f64(self.hide_delay_secs.max(0.0))
    }

    /// Sync tick interval as a `Duration`.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

/// Player process settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MpvConfig {
    /// mpv executable name or path.
    pub binary: String,
    /// Extra arguments appended to the mpv command line.
    pub extra_args: Vec<String>,
}

impl Default for MpvConfig {
    fn default() -> Self {
        Self {
            binary: "mpv".to_string(),
            extra_args: Vec::new(),
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme name: "dark", "classic" or "ocean".
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Write this configuration to the default path, creating directories
    /// as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }

    /// Path of the config file: `<config_dir>/vdeck/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("vdeck").join("config.toml"))
    }
}

/// Outcome of a config migration.
#[derive(Debug, Clone)]
pub struct MigrationResult {
    /// The migrated file content, comments and formatting preserved.
    pub content: String,
    /// Added fields as dotted `section.key` names.
    pub added_fields: Vec<String>,
    /// Sections that did not exist before.
    pub sections_added: Vec<String>,
}

impl MigrationResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add fields missing from `content` with their default values.
///
/// Existing values, comments and layout are left alone; new sections and
/// keys are appended. The input may be empty, which produces a full
/// default config.
pub fn migrate_config(content: &str) -> Result<MigrationResult> {
    let mut doc: DocumentMut = content.parse().context("Failed to parse config file")?;
    let defaults =
        toml::Value::try_from(Config::default()).context("Failed to serialize default config")?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    if let toml::Value::Table(sections) = defaults {
        for (section_name, section_value) in sections {
            let toml::Value::Table(fields) = section_value else {
                continue;
            };

            if doc.get(&section_name).is_none() {
                doc.insert(&section_name, toml_edit::table());
                sections_added.push(section_name.clone());
            }

            // A scalar where a section belongs is left alone
            let Some(section) = doc
                .get_mut(&section_name)
                .and_then(|item| item.as_table_like_mut())
            else {
                continue;
            };

            for (key, value) in fields {
                if section.get(&key).is_none() {
                    section.insert(&key, value_to_item(&value));
                    added_fields.push(format!("{}.{}", section_name, key));
                }
            }
        }
    }

    Ok(MigrationResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}

fn value_to_item(value: &toml::Value) -> toml_edit::Item {
    match value {
        toml::Value::String(s) => toml_edit::value(s.clone()),
        toml::Value::Integer(i) => toml_edit::value(*i),
        toml::Value::Float(f) => toml_edit::value(*f),
        toml::Value::Boolean(b) => toml_edit::value(*b),
        toml::Value::Array(items) => {
            let mut array = toml_edit::Array::new();
            for item in items {
                match item {
                    toml::Value::String(s) => array.push(s.clone()),
                    toml::Value::Integer(i) => array.push(*i),
                    toml::Value::Float(f) => array.push(*f),
                    toml::Value::Boolean(b) => array.push(*b),
                    _ => {}
                }
            }
            toml_edit::value(array)
        }
        // Nested tables and datetimes do not occur in this config shape
        _ => toml_edit::Item::None,
    }
}
