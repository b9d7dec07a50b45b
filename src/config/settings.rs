//! User settings for finplan
//!
//! Manages presentation preferences: currency formatting, alert timing,
//! the navigation breakpoint and the form field bindings.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::FinplanPaths;
use crate::error::FinplanError;
use crate::models::CurrencyFormat;
use crate::surface::FieldBindings;

/// User settings for finplan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol and separators
    #[serde(default)]
    pub currency: CurrencyFormat,

    /// Seconds an alert stays visible
    #[serde(default = "default_alert_duration_secs")]
    pub alert_duration_secs: u64,

    /// Terminal width (columns) at or below which the navigation menu
    /// behaves in its collapsed, mobile-style mode
    #[serde(default = "default_nav_breakpoint")]
    pub nav_breakpoint: u16,

    /// TUI tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Field identifiers used by the calculators
    #[serde(default)]
    pub bindings: FieldBindings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_alert_duration_secs() -> u64 {
    4
}

fn default_nav_breakpoint() -> u16 {
    100
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: CurrencyFormat::default(),
            alert_duration_secs: default_alert_duration_secs(),
            nav_breakpoint: default_nav_breakpoint(),
            tick_rate_ms: default_tick_rate_ms(),
            bindings: FieldBindings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinplanPaths) -> Result<Self, FinplanError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinplanError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinplanError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinplanPaths) -> Result<(), FinplanError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinplanError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            FinplanError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
