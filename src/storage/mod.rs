//! Storage layer for the expense tracker
//!
//! Provides the key-value backends (JSON file with atomic writes, in-memory)
//! and the persisted layout of limit, ledger and theme.

pub mod file_io;
pub mod kv;
pub mod ledger;

pub use file_io::{read_json, write_json_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use ledger::{
    load_snapshot, save_snapshot, LedgerSnapshot, EXPENSES_KEY, MONTHLY_LIMIT_KEY, THEME_KEY,
};

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Open the file-backed store under the configured data directory
pub fn open_file_store(paths: &ExpensePaths) -> Result<FileStore, ExpenseError> {
    paths.ensure_directories()?;
    Ok(FileStore::open(paths.storage_file()))
}
