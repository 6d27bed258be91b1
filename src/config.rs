//! Application configuration with persistence.
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/picart/config.json`
//! - macOS: `~/Library/Application Support/picart/config.json`
//! - Windows: `%APPDATA%/picart/config.json`
//!
//! Missing fields fall back to their defaults, so older or hand-written
//! files keep loading.

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_TOAST_TICKS;
use crate::platform::AppPaths;

/// User-editable settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the cart file and log, replacing the platform data
    /// directory when set.
    pub data_dir: Option<PathBuf>,
    /// How many UI ticks a toast stays on screen.
    pub toast_ticks: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            toast_ticks: DEFAULT_TOAST_TICKS,
        }
    }
}

impl AppConfig {
    /// Loads the configuration, falling back to defaults on any failure.
    #[must_use]
    pub fn load(paths: &AppPaths) -> Self {
        let loaded = paths
            .config_file()
            .and_then(|path| Self::try_load_from(&path));

        match loaded {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn try_load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Writes the configuration to the platform config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved or the write fails.
    pub fn save(&self, paths: &AppPaths) -> Result<()> {
        self.save_to(&paths.config_file()?)
    }

    /// Writes the configuration as pretty-printed JSON to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolves the effective data directory: the command-line value wins
    /// over the configured one.
    #[must_use]
    pub fn resolve_data_dir(&self, cli_override: Option<PathBuf>) -> Option<PathBuf> {
        cli_override.or_else(|| self.data_dir.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================
