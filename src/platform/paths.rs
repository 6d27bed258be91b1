//! Platform directory lookup for configuration, cart data and logs.
//!
//! | Platform | Config Dir | Data Dir |
//! |----------|------------|----------|
//! | Linux | `~/.config/picart` | `~/.local/share/picart` |
//! | macOS | `~/Library/Application Support/picart` | Same as config |
//! | Windows | `%APPDATA%/picart` | `%APPDATA%/picart` |

use color_eyre::Result;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "picart";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Log file name.
pub const LOG_FILE_NAME: &str = "picart.log";

// ============================================================================
// AppPaths
// ============================================================================

/// Resolves the application's directories and well-known files.
///
/// An explicit data directory (from the command line or the config file)
/// replaces the platform data directory for both cart storage and logs.
#[derive(Debug, Clone, Default)]
pub struct AppPaths {
    data_dir_override: Option<PathBuf>,
}

impl AppPaths {
    /// Creates paths rooted at the platform directories.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates paths whose data directory is `dir` when given.
    #[must_use]
    pub fn with_data_dir(dir: Option<PathBuf>) -> Self {
        Self {
            data_dir_override: dir,
        }
    }

    /// Returns the configuration directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the data directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let path = match &self.data_dir_override {
            Some(dir) => dir.clone(),
            None => {
                let mut path = dirs::data_dir()
                    .ok_or_else(|| color_eyre::eyre::eyre!("Could not find data directory"))?;
                path.push(APP_NAME);
                path
            }
        };
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory is unavailable.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Returns the path to the log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory is unavailable.
    pub fn log_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(LOG_FILE_NAME))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_override_is_created() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("cart-data");
        let paths = AppPaths::with_data_dir(Some(dir.clone()));

        assert_eq!(paths.data_dir().unwrap(), dir);
        assert!(dir.is_dir());
    }

    #[test]
    fn test_log_file_lives_in_data_dir() {
        let root = tempfile::tempdir().unwrap();
        let paths = AppPaths::with_data_dir(Some(root.path().to_path_buf()));

        let log = paths.log_file().unwrap();
        assert_eq!(log.parent(), Some(root.path()));
        assert_eq!(log.file_name().and_then(|n| n.to_str()), Some(LOG_FILE_NAME));
    }

    #[test]
    fn test_default_data_dir_contains_app_name() {
        if let Ok(dir) = AppPaths::new().data_dir() {
            assert_eq!(dir.file_name().and_then(|n| n.to_str()), Some(APP_NAME));
        }
        // Skip if data dir unavailable (CI environments)
    }

    #[test]
    fn test_config_file_has_json_extension() {
        if let Ok(path) = AppPaths::new().config_file() {
            assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
            let parent = path
                .parent()
                .and_then(|p| p.file_name())
                .and_then(|n| n.to_str());
            assert_eq!(parent, Some(APP_NAME));
        }
        // Skip if config dir unavailable
    }
}
