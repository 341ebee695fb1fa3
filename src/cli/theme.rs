//! Theme CLI commands

use clap::Subcommand;

use crate::error::ExpenseResult;
use crate::services::{ExpenseStore, RenderSurface};
use crate::storage::KeyValueStore;

/// Theme subcommands
#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Switch between dark and light mode
    Toggle,
    /// Show the current mode
    Show,
}

pub fn handle_theme_command<K, S>(
    store: &mut ExpenseStore<K, S>,
    cmd: ThemeCommands,
) -> ExpenseResult<()>
where
    K: KeyValueStore,
    S: RenderSurface,
{
    match cmd {
        ThemeCommands::Toggle => {
            let theme = store.toggle_theme();
            println!("Theme: {}", theme);
        }
        ThemeCommands::Show => println!("Theme: {}", store.theme()),
    }
    Ok(())
}
