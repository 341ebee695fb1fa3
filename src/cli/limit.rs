//! Monthly limit CLI commands

use clap::Subcommand;

use crate::display::format_summary;
use crate::error::ExpenseResult;
use crate::services::{ExpenseStore, RenderSurface};
use crate::storage::KeyValueStore;

/// Limit subcommands
#[derive(Subcommand)]
pub enum LimitCommands {
    /// Set the monthly spending limit (0 clears it)
    Set {
        /// Limit amount, e.g. "5000" or "2499.50"
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Show the current limit
    Show,
}

/// Handle a limit command
pub fn handle_limit_command<K, S>(
    store: &mut ExpenseStore<K, S>,
    cmd: LimitCommands,
) -> ExpenseResult<()>
where
    K: KeyValueStore,
    S: RenderSurface,
{
    let symbol = store.currency_symbol().to_string();

    match cmd {
        LimitCommands::Set { value } => {
            let limit = store.set_limit(&value)?;
            println!("Monthly limit set to {}", limit.format_with_symbol(&symbol));
            print!("{}", format_summary(&store.view(), &symbol));
        }
        LimitCommands::Show => {
            let limit = store.monthly_limit();
            if limit.is_zero() {
                println!("No monthly limit set.");
            } else {
                println!("Monthly limit: {}", limit.format_with_symbol(&symbol));
            }
        }
    }

    Ok(())
}
