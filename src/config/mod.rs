// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme
//! - `[alerts]` - Per-severity durations, stacking and animation
//!
//! Every field is optional; missing or out-of-range values fall back to
//! the constants in [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_alerts::config::{self, Position};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.alerts.position = Some(Position::BottomRight);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use crate::store::{Severity, SeverityDurations};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning returned by [`load`] when the file exists but cannot be parsed.
pub const LOAD_WARNING: &str = "Settings file could not be read; using defaults";

// =============================================================================
// Enums
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

/// Screen corner the toast stack is anchored to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl Position {
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Position::TopRight | Position::TopLeft)
    }

    #[must_use]
    pub fn is_right(self) -> bool {
        matches!(self, Position::TopRight | Position::BottomRight)
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    #[serde(default)]
    pub theme: ThemeMode,
}

/// Alert timing, stacking and animation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AlertsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_ms: Option<u64>,

    /// Number of toasts rendered at once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enter_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_ms: Option<u64>,
}

impl AlertsConfig {
    /// Display duration for `severity`, clamped to the accepted range.
    #[must_use]
    pub fn duration_for(&self, severity: Severity) -> Duration {
        let ms = match severity {
            Severity::Success => self.success_ms,
            Severity::Info => self.info_ms,
            Severity::Warning => self.warning_ms,
            Severity::Error => self.error_ms,
        }
        .unwrap_or(DEFAULT_ALERT_DURATION_MS)
        .clamp(MIN_ALERT_DURATION_MS, MAX_ALERT_DURATION_MS);

        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn durations(&self) -> SeverityDurations {
        SeverityDurations {
            success: self.duration_for(Severity::Success),
            info: self.duration_for(Severity::Info),
            warning: self.duration_for(Severity::Warning),
            error: self.duration_for(Severity::Error),
        }
    }

    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible
            .unwrap_or(DEFAULT_MAX_VISIBLE)
            .clamp(MIN_MAX_VISIBLE, MAX_MAX_VISIBLE)
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position.unwrap_or_default()
    }

    #[must_use]
    pub fn enter_duration(&self) -> Duration {
        Duration::from_millis(self.enter_ms.unwrap_or(DEFAULT_ENTER_MS).min(MAX_ANIMATION_MS))
    }

    #[must_use]
    pub fn exit_duration(&self) -> Duration {
        Duration::from_millis(self.exit_ms.unwrap_or(DEFAULT_EXIT_MS).min(MAX_ANIMATION_MS))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub alerts: AlertsConfig,
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default location.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("failed to load {}: {err}", path.display());
                    return (Config::default(), Some(LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
