//! Tracing subscriber setup
//!
//! One-shot CLI commands log to stderr. The TUI owns the terminal, so it logs
//! to a file instead. The level comes from `EXPENSE_LOG` (an `EnvFilter`
//! directive string) and defaults to warnings from this crate.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::ExpenseError;

/// Environment variable holding the filter directives
pub const LOG_ENV: &str = "EXPENSE_LOG";

const DEFAULT_DIRECTIVE: &str = "expense_tracker=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Log to stderr
pub fn init_stderr_logging() {
    // A subscriber may already be installed (tests, repeated init); keep it
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Append log lines to `path`
pub fn init_file_logging(path: &Path) -> Result<(), ExpenseError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ExpenseError::Io(format!("Failed to open log file {}: {}", path.display(), e)))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
