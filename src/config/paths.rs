//! Path management for finplan
//!
//! ## Path Resolution Order
//!
//! 1. `FINPLAN_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/finplan` on Linux, `%APPDATA%\finplan` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinplanError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "FINPLAN_CONFIG_DIR";

/// Manages all paths used by finplan
#[derive(Debug, Clone)]
pub struct FinplanPaths {
    /// Base directory for all finplan files
    base_dir: PathBuf,
}

impl FinplanPaths {
    /// Create a new FinplanPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, FinplanError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FinplanPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("finplan.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FinplanError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinplanError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FinplanError> {
    ProjectDirs::from("", "", "finplan")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FinplanError::Config("Could not determine a config directory".into()))
}
