//! # Configuration
//!
//! Reads user configuration from `~/.config/chronicle/config.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is deserialized from a JSON file in the user's XDG
//! config directory. The file is only ever read: toggling dark mode or
//! favoriting a listing during a session is never written back.
//!
//! ## File Location
//!
//! ```text
//! ~/.config/chronicle/config.json
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.
//!
//! ## Example
//!
//! ```json
//! {
//!   "light_theme": "Solarized Light",
//!   "dark_theme": "Nord",
//!   "data_file": "/home/me/jobs.json"
//! }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Theme used in light mode (must match a built-in light theme name).
    #[serde(default = "default_light_theme")]
    pub light_theme: String,

    /// Theme used in dark mode (must match a built-in dark theme name).
    #[serde(default = "default_dark_theme")]
    pub dark_theme: String,

    /// Listings file to load when `--data` is not given.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

fn default_light_theme() -> String {
    "Catppuccin Latte".to_string()
}

fn default_dark_theme() -> String {
    "Catppuccin Mocha".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            light_theme: default_light_theme(),
            dark_theme: default_dark_theme(),
            data_file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location. Returns
    /// `Config::default()` if the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Return the path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "chronicle")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.light_theme, "Catppuccin Latte");
        assert_eq!(config.dark_theme, "Catppuccin Mocha");
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_deserialize_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_deserialize_partial() {
        let json = r#"{"dark_theme": "Dracula", "data_file": "/tmp/jobs.json"}"#;
        let config: Config = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.dark_theme, "Dracula");
        assert_eq!(config.light_theme, "Catppuccin Latte");
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/jobs.json")));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, r#"{"light_theme": "Gruvbox Light"}"#).expect("write");

        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded.light_theme, "Gruvbox Light");
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("does_not_exist.json");

        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_from_invalid_json_errors() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ nope").expect("write");

        let err = Config::load_from(&config_path).expect_err("invalid json");
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_deny_unknown_fields() {
        let json = r#"{"dark_theme": "Nord", "favorites": ["1"]}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err(), "should reject unknown fields");
    }
}
