// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! feedback settings to a `settings.toml` file.
//!
//! The file has one section per component. Every field is optional and
//! falls back to the constants in [`defaults`]:
//!
//! ```toml
//! [notifications]
//! max_visible = 3
//! position = "bottom-right"
//! error_duration_ms = 8000
//!
//! [loading]
//! delay_ms = 250
//! ```
//!
//! # Directory Resolution Order
//!
//! 1. **Explicit override** - parameter to the `_with_override()` functions
//! 2. **Environment variable** `ICED_FEEDBACK_CONFIG_DIR` (if set and non-empty)
//! 3. **Platform default** - `dirs::config_dir()` joined with `IcedFeedback`
//!
//! # Examples
//!
//! ```no_run
//! use iced_feedback::config::{self, Config};
//!
//! let (mut config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//!
//! config.notifications.max_visible = Some(3);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::loading::{OverlayConfig, VisibilityConfig};
use crate::ui::notifications::{Position, QueueConfig, QueueOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedFeedback";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_FEEDBACK_CONFIG_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub loading: LoadingConfig,
}

/// `[notifications]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_duration_ms: Option<u64>,
    /// Zero keeps errors on screen until dismissed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_duration_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_duration_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_duration_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate_threshold_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration_ms: Option<u64>,
}

impl NotificationsConfig {
    /// Converts the section into a partial queue update.
    #[must_use]
    pub fn options(&self) -> QueueOptions {
        QueueOptions {
            max_visible: self.max_visible,
            position: self.position,
            success_duration: self.success_duration_ms.map(Duration::from_millis),
            error_duration: self.error_duration_ms.map(Duration::from_millis),
            warning_duration: self.warning_duration_ms.map(Duration::from_millis),
            info_duration: self.info_duration_ms.map(Duration::from_millis),
            duplicate_threshold: self.duplicate_threshold_ms.map(Duration::from_millis),
            animation_duration: self.animation_duration_ms.map(Duration::from_millis),
        }
    }

    /// Returns the effective queue settings.
    #[must_use]
    pub fn queue_config(&self) -> QueueConfig {
        let mut config = QueueConfig::default();
        config.apply(&self.options());
        config
    }
}

/// `[loading]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_duration_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_exit_ms: Option<u64>,
}

impl LoadingConfig {
    #[must_use]
    pub fn visibility(&self) -> VisibilityConfig {
        VisibilityConfig {
            delay: Duration::from_millis(self.delay_ms.unwrap_or(DEFAULT_LOADING_DELAY_MS)),
            min_duration: Duration::from_millis(
                self.min_duration_ms
                    .unwrap_or(DEFAULT_LOADING_MIN_DURATION_MS),
            ),
        }
    }

    #[must_use]
    pub fn overlay(&self) -> OverlayConfig {
        OverlayConfig {
            visibility: self.visibility(),
            exit_animation: Duration::from_millis(
                self.overlay_exit_ms.unwrap_or(DEFAULT_OVERLAY_EXIT_MS),
            ),
        }
    }
}

/// Returns the config directory, see the module docs for the resolution order.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_file_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(override_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the settings file from the default location.
///
/// Never fails: a missing file yields the defaults, an unreadable or invalid
/// one yields the defaults plus a warning for the user.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Like [`load`], reading from `override_dir` when given.
#[must_use]
pub fn load_with_override(override_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_file_with_override(override_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "settings loaded");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "settings ignored");
            let warning = format!("Ignoring {}: {err}", path.display());
            (Config::default(), Some(warning))
        }
    }
}

/// Saves the settings file to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Like [`save`], writing into `override_dir` when given.
pub fn save_with_override(config: &Config, override_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_file_with_override(override_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
