//! Expense list formatting
//!
//! Renders the ledger as a table. Positions are shown 1-based; the CLI
//! `delete` command takes the same numbers.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
}

/// Format the ledger in entry order
pub fn format_expense_table(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = expenses.iter().enumerate().map(|(i, e)| ExpenseRow {
        position: i + 1,
        category: e.category.to_string(),
        name: e.name.clone(),
        amount: e.amount.format_with_symbol(symbol),
        date: e.date.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}
