//! Core data models for the expense tracker
//!
//! This module contains the data structures of the domain: expenses, their
//! categories, money amounts and the budget scalars.

pub mod budget;
pub mod category;
pub mod expense;
pub mod money;

pub use budget::{parse_limit, LimitValidationError, Theme};
pub use category::{color_for_label, ColorToken, ExpenseCategory};
pub use expense::{Expense, ExpenseInput, ExpenseValidationError};
pub use money::{Money, MoneyParseError, DEFAULT_CURRENCY_SYMBOL, MAX_AMOUNT};
