//! Configuration handling for FarmTech
//!
//! Configuration is optional. It is read from the path given with
//! `--config`, else `farmtech.toml` in the working directory, else
//! `~/.config/farmtech/config.toml` (platform equivalent). Every field has a
//! default, so a missing file behaves like an empty one.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::csv::DEFAULT_EXPORT_FILE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Farm details shown in the menu banner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FarmConfig {
    pub name: String,

    /// Total farm area in square meters
    pub size_m2: f64,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            name: "Fazenda FOF (Future Of Food)".to_string(),
            size_m2: 20_000.0,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where the CSV export is written
    pub export_path: PathBuf,

    /// Clear the screen before each menu (only when stdout is a terminal)
    pub clear_screen: bool,

    /// Wait for ENTER after each operation
    pub pause_after_operation: bool,

    pub farm: FarmConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            clear_screen: true,
            pause_after_operation: true,
            farm: FarmConfig::default(),
        }
    }
}

impl Config {
    /// Name of the config file looked up in the working directory
    pub const LOCAL_FILE: &'static str = "farmtech.toml";

    /// Loads configuration from an explicit path or the default locations
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            return Self::from_path(path);
        }

        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        match Self::discover(&cwd, Self::global_config_dir().as_deref()) {
            Some(path) => Self::from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Returns the first existing config file: local, then global
    pub fn discover(cwd: &Path, global_dir: Option<&Path>) -> Option<PathBuf> {
        let local = cwd.join(Self::LOCAL_FILE);
        if local.is_file() {
            return Some(local);
        }

        global_dir
            .map(|dir| dir.join("config.toml"))
            .filter(|path| path.is_file())
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "farmtech", "farmtech").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Reads and parses a config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Parses config from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
