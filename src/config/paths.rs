//! Path management for finboard
//!
//! ## Path Resolution Order
//!
//! 1. `FINBOARD_DATA_DIR` environment variable (if set)
//! 2. `$XDG_CONFIG_HOME/finboard`
//! 3. The platform config directory from `directories::ProjectDirs`

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::FinboardError;

/// Manages all paths used by finboard
#[derive(Debug, Clone)]
pub struct FinboardPaths {
    /// Base directory for all finboard data
    base_dir: PathBuf,
}

impl FinboardPaths {
    /// Create a new FinboardPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FinboardError> {
        let base_dir = match std::env::var_os("FINBOARD_DATA_DIR") {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinboardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default SQLite database
    pub fn database_file(&self) -> PathBuf {
        self.data_dir().join("finboard.db")
    }

    /// Default JSON dataset
    pub fn dataset_file(&self) -> PathBuf {
        self.data_dir().join("dataset.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FinboardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinboardError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinboardError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FinboardError> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg).join("finboard"));
    }

    ProjectDirs::from("", "", "finboard")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FinboardError::Config("Could not determine a home directory".into()))
}
