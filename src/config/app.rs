//! Main application configuration
//!
//! This module defines the primary configuration structures for the ranking
//! service, including environment variable and TOML file loading and validation.

use crate::config::rating::RatingConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub storage: StorageSettings,
    pub rating: RatingConfig,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Session store settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Path of the JSON file holding the current session's players
    pub path: PathBuf,
    /// Wipe the stored session every time the program starts
    pub reset_on_start: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "table-tennis-rank".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("ttrank-session.json"),
            reset_on_start: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Storage settings
        if let Ok(path) = env::var("TTRANK_STORE_PATH") {
            self.storage.path = PathBuf::from(path);
        }
        if let Ok(reset) = env::var("TTRANK_RESET_ON_START") {
            self.storage.reset_on_start = reset
                .parse()
                .map_err(|_| anyhow!("Invalid TTRANK_RESET_ON_START value: {}", reset))?;
        }

        // Rating settings
        if let Ok(points) = env::var("TTRANK_WIN_POINTS") {
            self.rating.win_points = points
                .parse()
                .map_err(|_| anyhow!("Invalid TTRANK_WIN_POINTS value: {}", points))?;
        }
        if let Ok(points) = env::var("TTRANK_LOSS_POINTS") {
            self.rating.loss_points = points
                .parse()
                .map_err(|_| anyhow!("Invalid TTRANK_LOSS_POINTS value: {}", points))?;
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.storage.path.as_os_str().is_empty() {
        return Err(anyhow!("Store path cannot be empty"));
    }

    if config.rating.win_points <= 0 {
        return Err(anyhow!("Win points must be positive"));
    }
    if config.rating.loss_points <= 0 {
        return Err(anyhow!("Loss points must be positive"));
    }

    Ok(())
}
