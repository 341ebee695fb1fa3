//! Path management for the expense tracker
//!
//! Provides XDG-compliant path resolution for configuration, data and logs.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/expense-tracker` or `~/.config/expense-tracker`
//! 3. Windows: `%APPDATA%\expense-tracker`

use std::path::PathBuf;

use crate::error::ExpenseError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for all expense tracker data
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/expense-tracker/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/expense-tracker/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the key-value store holding limit, ledger and theme
    pub fn storage_file(&self) -> PathBuf {
        self.data_dir().join("storage.json")
    }

    /// Get the path to the log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("expense.log")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("expense-tracker"));
    }

    let home = std::env::var("HOME")
        .map_err(|_| ExpenseError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("expense-tracker"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ExpenseError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("expense-tracker"))
}
