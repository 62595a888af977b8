// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! toast defaults and the theme mode to a `settings.toml` file.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit path** - `load_from_path` / `save_to_path` (CLI `--config`, tests)
//! 2. **Environment variable** - `ICED_TOAST_CONFIG`
//! 3. **Platform default** - `<config dir>/IcedToast/settings.toml` via `dirs`
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//! use iced_toast::toasts::Position;
//!
//! let mut config = config::load().unwrap_or_default();
//! config.toast.position = Position::BottomLeft;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use crate::toasts::{AutoClose, Options, Position};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::{
    DEFAULT_AUTO_CLOSE_MS, DEFAULT_CAN_CLOSE, DEFAULT_PAUSE_ON_HOVER, DEFAULT_SHOW_PROGRESS,
};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

/// Environment variable pointing at an alternative `settings.toml`.
pub const ENV_CONFIG_PATH: &str = "ICED_TOAST_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme_mode: ThemeMode,
    pub toast: ToastDefaults,
}

/// Options applied to every toast unless overridden at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastDefaults {
    pub position: Position,
    /// Auto-close delay in milliseconds, `0` disables it.
    pub auto_close_ms: u64,
    pub show_progress: bool,
    pub can_close: bool,
    pub pause_on_hover: bool,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            position: Position::default(),
            auto_close_ms: DEFAULT_AUTO_CLOSE_MS,
            show_progress: DEFAULT_SHOW_PROGRESS,
            can_close: DEFAULT_CAN_CLOSE,
            pause_on_hover: DEFAULT_PAUSE_ON_HOVER,
        }
    }
}

impl ToastDefaults {
    #[must_use]
    pub fn auto_close(&self) -> AutoClose {
        AutoClose::from_millis(defaults::clamp_auto_close_ms(self.auto_close_ms))
    }

    /// Options for a toast with `text`, carrying these defaults.
    pub fn options(&self, text: impl Into<String>) -> Options {
        Options::new(text)
            .position(self.position)
            .auto_close(self.auto_close())
            .show_progress(self.show_progress)
            .can_close(self.can_close)
            .pause_on_hover(self.pause_on_hover)
    }
}

/// Returns the config file path: `ICED_TOAST_CONFIG` if set and non-empty,
/// otherwise the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(ENV_CONFIG_PATH).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file. Unparsable content falls back to defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "config saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_toast_defaults() {
        let config = Config {
            theme_mode: ThemeMode::Dark,
            toast: ToastDefaults {
                position: Position::BottomCenter,
                auto_close_ms: 0,
                show_progress: false,
                can_close: false,
                pause_on_hover: true,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_path_fills_missing_fields() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[toast]\nposition = \"top-left\"\n")
            .expect("failed to write partial toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.toast.position, Position::TopLeft);
        assert_eq!(loaded.toast.auto_close_ms, DEFAULT_AUTO_CLOSE_MS);
        assert_eq!(loaded.theme_mode, ThemeMode::System);
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn default_toast_defaults_match_widget_defaults() {
        let defaults = ToastDefaults::default();
        assert_eq!(defaults.position, Position::TopRight);
        assert_eq!(
            defaults.auto_close(),
            AutoClose::After(Duration::from_secs(5))
        );
        assert!(defaults.show_progress);
        assert!(defaults.can_close);
    }

    #[test]
    fn options_carry_defaults_and_clamp_auto_close() {
        let defaults = ToastDefaults {
            auto_close_ms: 10,
            position: Position::BottomRight,
            ..ToastDefaults::default()
        };
        let options = defaults.options("hello");
        assert_eq!(options.text, "hello");
        assert_eq!(options.position, Position::BottomRight);
        assert_eq!(
            options.auto_close,
            AutoClose::After(Duration::from_millis(defaults::MIN_AUTO_CLOSE_MS))
        );
    }
}
