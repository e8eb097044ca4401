//! User settings for finboard
//!
//! Report tunables and rendering preferences, persisted as `config.json`.

use serde::{Deserialize, Serialize};

use super::paths::FinboardPaths;
use crate::display::{Labels, Locale};
use crate::error::FinboardError;
use crate::reports::{
    ReportOptions, DEFAULT_FORECAST_DAYS, DEFAULT_TOP_CLIENTS, DEFAULT_TOP_SUPPLIERS,
};
use crate::storage::{read_json, write_json_atomic};

/// User settings for finboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Suppliers kept by the concentration report
    #[serde(default = "default_top_suppliers")]
    pub top_suppliers: usize,

    /// Clients kept by the revenue ranking
    #[serde(default = "default_top_clients")]
    pub top_clients: usize,

    /// Forecast horizon in days
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,

    /// Currency symbol printed before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Label language
    #[serde(default)]
    pub locale: Locale,

    /// Fallback log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_top_suppliers() -> usize {
    DEFAULT_TOP_SUPPLIERS
}

fn default_top_clients() -> usize {
    DEFAULT_TOP_CLIENTS
}

fn default_forecast_days() -> u32 {
    DEFAULT_FORECAST_DAYS
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            top_suppliers: default_top_suppliers(),
            top_clients: default_top_clients(),
            forecast_days: default_forecast_days(),
            currency_symbol: default_currency(),
            locale: Locale::default(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinboardPaths) -> Result<Self, FinboardError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted until the caller saves
            return Ok(Settings::default());
        }

        read_json(&settings_path).map_err(|e| {
            FinboardError::Config(format!(
                "Failed to load settings from {}: {}",
                settings_path.display(),
                e
            ))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinboardPaths) -> Result<(), FinboardError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Report tunables taken from these settings
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            top_suppliers: self.top_suppliers,
            top_clients: self.top_clients,
            forecast_days: self.forecast_days,
        }
    }

    /// Rendering context taken from these settings
    pub fn labels(&self) -> Labels {
        Labels::new(self.locale, self.currency_symbol.clone())
    }
}
