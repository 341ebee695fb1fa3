//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the expense store.

pub mod console;
pub mod expense;
pub mod limit;
pub mod theme;

pub use console::ConsoleSurface;
pub use expense::{
    handle_add, handle_chart, handle_delete, handle_list, handle_summary, today, AddArgs,
};
pub use limit::{handle_limit_command, LimitCommands};
pub use theme::{handle_theme_command, ThemeCommands};

use crate::services::ExpenseStore;
use crate::storage::FileStore;

/// The store as driven from one-shot commands
pub type CliStore = ExpenseStore<FileStore, ConsoleSurface>;
