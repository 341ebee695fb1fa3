//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed or missing user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Reading from or writing to persistent storage failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted data did not have the expected structure
    #[error("Corrupted data under '{key}': {reason}")]
    Corrupted { key: &'static str, reason: String },

    /// Key bindings that are missing or unusable at startup
    #[error("Invalid key bindings: {}", .0.join(", "))]
    MissingBindings(Vec<String>),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl ExpenseError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
