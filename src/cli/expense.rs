//! Expense CLI commands
//!
//! Add, list, delete, plus the summary and chart read-outs.

use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use clap::Args;

use crate::config::Settings;
use crate::display::{format_date_chart, format_expense_table, format_summary};
use crate::error::ExpenseResult;
use crate::models::ExpenseInput;
use crate::services::{ExpenseStore, RenderSurface};
use crate::storage::KeyValueStore;

/// Arguments of `expense add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was spent on
    pub name: String,
    /// Amount, e.g. "12.50"
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Date of the expense, defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Food, Travel, Entertainment, Shopping or Other
    #[arg(short, long, default_value = "Food")]
    pub category: String,
}

impl AddArgs {
    /// Form input with the date filled in from `today` when omitted
    pub fn to_input(&self, today: &str) -> ExpenseInput {
        ExpenseInput::new(
            self.name.as_str(),
            self.amount.as_str(),
            self.date.as_deref().unwrap_or(today),
            Some(self.category.as_str()),
        )
    }
}

/// Today's date in the configured format, ISO when the format is unusable
pub fn today(settings: &Settings) -> String {
    let format = settings.date_format.as_str();
    let usable = !format.is_empty()
        && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error));
    let format = if usable { format } else { "%Y-%m-%d" };
    Local::now().format(format).to_string()
}

pub fn handle_add<K, S>(
    store: &mut ExpenseStore<K, S>,
    settings: &Settings,
    args: AddArgs,
) -> ExpenseResult<()>
where
    K: KeyValueStore,
    S: RenderSurface,
{
    let input = args.to_input(&today(settings));
    let outcome = store.add_expense(&input)?;
    let symbol = store.currency_symbol().to_string();

    let expense = &store.expenses()[outcome.position];
    println!(
        "Added #{}: {} {} ({}, {})",
        outcome.position + 1,
        expense.name,
        expense.amount.format_with_symbol(&symbol),
        expense.category,
        expense.date
    );
    print!("{}", format_summary(&store.view(), &symbol));
    Ok(())
}

pub fn handle_list<K, S>(store: &ExpenseStore<K, S>) -> ExpenseResult<()>
where
    K: KeyValueStore,
    S: RenderSurface,
{
    print!("{}", format_expense_table(store.expenses(), store.currency_symbol()));
    Ok(())
}

/// Delete by the 1-based number shown in `list`
pub fn handle_delete<K, S>(store: &mut ExpenseStore<K, S>, number: usize) -> ExpenseResult<()>
where
    K: KeyValueStore,
    S: RenderSurface,
{
    let removed = match number.checked_sub(1) {
        Some(position) => store.delete_expense(position),
        None => None,
    };

    match removed {
        Some(expense) => {
            println!("Deleted #{}: {}", number, expense.name);
            print!("{}", format_summary(&store.view(), store.currency_symbol()));
        }
        None => println!("No expense #{} (nothing deleted).", number),
    }
    Ok(())
}

pub fn handle_summary<K, S>(store: &ExpenseStore<K, S>) -> ExpenseResult<()>
where
    K: KeyValueStore,
    S: RenderSurface,
{
    print!("{}", format_summary(&store.view(), store.currency_symbol()));
    Ok(())
}

pub fn handle_chart<K, S>(store: &ExpenseStore<K, S>) -> ExpenseResult<()>
where
    K: KeyValueStore,
    S: RenderSurface,
{
    print!("{}", format_date_chart(&store.per_date_totals(), store.currency_symbol()));
    Ok(())
}
