//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/arete/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/arete/` (~/.config/arete/)
//! - Data: `$XDG_DATA_HOME/arete/` (~/.local/share/arete/)
//! - State/Logs: `$XDG_STATE_HOME/arete/` (~/.local/state/arete/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_DATA_HOME or ~/.local/share
fn xdg_data_home() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/share"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Challenge settings
    #[serde(default)]
    pub challenge: ChallengeConfig,

    /// Per-category color overrides, `CategoryName = "#rrggbb"`
    #[serde(default)]
    pub palette: HashMap<String, String>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Long-running challenge settings (the "N days" banner)
#[derive(Debug, Deserialize)]
pub struct ChallengeConfig {
    /// Target length of the challenge in days
    #[serde(default = "default_target_days")]
    pub target_days: u32,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            target_days: default_target_days(),
        }
    }
}

fn default_target_days() -> u32 {
    900
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/arete/config.toml` (~/.config/arete/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("arete").join("config.toml")
    }

    /// Returns the data directory path (for the JSON store)
    ///
    /// `$XDG_DATA_HOME/arete/` (~/.local/share/arete/)
    pub fn data_dir() -> PathBuf {
        xdg_data_home().join("arete")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/arete/` (~/.local/state/arete/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("arete")
    }

    /// Returns the store file path
    ///
    /// `$XDG_DATA_HOME/arete/store.json` (~/.local/share/arete/store.json)
    pub fn store_path() -> PathBuf {
        Self::data_dir().join("store.json")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/arete/arete.log` (~/.local/state/arete/arete.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("arete.log")
    }
}
