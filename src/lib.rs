//! Expense Tracker - monthly spending against a limit, from the terminal
//!
//! This library holds the whole tracker: a ledger of expenses, a monthly
//! limit, per-date totals and the theme preference, persisted through a
//! small key-value store. The `expense` binary drives it either as one-shot
//! commands or as a full-screen TUI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expenses, categories, money and the budget scalars
//! - `storage`: Key-value persistence and the ledger codec
//! - `services`: The expense store and its render-surface contract
//! - `display`: Plain-text formatting for the CLI
//! - `cli`: Command handlers
//! - `tui`: Terminal user interface
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::services::{ExpenseStore, RecordingSurface};
//! use expense_tracker::storage::MemoryStore;
//!
//! let mut store = ExpenseStore::open(MemoryStore::new(), RecordingSurface::new());
//! store.set_limit("5000")?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::ExpenseError;
