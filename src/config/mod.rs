//! Configuration module for finboard
//!
//! This module provides configuration management including:
//! - path resolution for the settings file and default data files
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinboardPaths;
pub use settings::Settings;
