//! Custom error types for finboard
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for finboard operations
#[derive(Error, Debug)]
pub enum FinboardError {
    /// The repository could not answer a read
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A row or an input value failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FinboardError {
    /// Create a validation error for a persisted row
    pub fn invalid_row(table: &'static str, id: i64, reason: impl Into<String>) -> Self {
        Self::Validation(format!("{} row {}: {}", table, id, reason.into()))
    }

    /// Check if this is a storage failure
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FinboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for FinboardError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<rusqlite::Error> for FinboardError {
    fn from(err: rusqlite::Error) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}

/// Result type alias for finboard operations
pub type FinboardResult<T> = Result<T, FinboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinboardError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_row_error() {
        let err = FinboardError::invalid_row("payables", 7, "negative amount");
        assert_eq!(
            err.to_string(),
            "Validation error: payables row 7: negative amount"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FinboardError = io_err.into();
        assert!(matches!(err, FinboardError::Io(_)));
    }

    #[test]
    fn test_from_sqlite_error_is_storage_unavailable() {
        let err: FinboardError = rusqlite::Error::InvalidQuery.into();
        assert!(err.is_storage_unavailable());
    }
}
