//! Display formatting for terminal output
//!
//! Provides utilities for formatting the ledger for one-shot CLI output:
//! summary lines, the expense table and the per-date bar chart.

pub mod chart;
pub mod expense;
pub mod summary;

pub use chart::{ascii_bar, format_date_chart};
pub use expense::format_expense_table;
pub use summary::format_summary;
