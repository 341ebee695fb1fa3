use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add, handle_chart, handle_delete, handle_limit_command, handle_list, handle_summary,
    handle_theme_command, AddArgs, CliStore, ConsoleSurface, LimitCommands, ThemeCommands,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::logging;
use expense_tracker::models::ExpenseCategory;
use expense_tracker::services::ExpenseStore;
use expense_tracker::storage::open_file_store;
use expense_tracker::tui::{run_tui, KeyMap};
use expense_tracker::ExpenseError;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Track monthly spending against a limit",
    long_about = "Record expenses, set a monthly limit and see what is left, \
                  either with one-shot commands or in the interactive TUI."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Monthly limit commands
    #[command(subcommand)]
    Limit(LimitCommands),

    /// Record an expense
    Add(AddArgs),

    /// List expenses in entry order
    #[command(alias = "ls")]
    List,

    /// Delete an expense by its number in `list`
    #[command(alias = "rm")]
    Delete {
        /// Number shown by `list` (1-based)
        number: usize,
    },

    /// Show limit, total spent and remaining
    Summary,

    /// Chart spending per date
    Chart,

    /// Theme preference commands
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Write a default config.json to edit
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Rejected input was already reported by the console surface
            let reported = e
                .downcast_ref::<ExpenseError>()
                .is_some_and(ExpenseError::is_validation);
            if !reported {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(Commands::Tui) => {
            // Fail before touching the terminal
            let keymap = KeyMap::from_settings(&settings)?;
            paths.ensure_directories()?;
            logging::init_file_logging(&paths.log_file())?;
            return run_tui(&paths, &settings, keymap);
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Wrote {}", paths.settings_file().display());
            return Ok(());
        }
        Some(Commands::Config) => {
            print_config(&paths, &settings);
            return Ok(());
        }
        Some(command) => command,
        None => {
            println!("Expense Tracker - monthly spending against a limit");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense tui' to launch the interactive interface.");
            return Ok(());
        }
    };

    logging::init_stderr_logging();

    let kv = open_file_store(&paths)?;
    let mut store: CliStore = ExpenseStore::open(kv, ConsoleSurface::stderr())
        .with_currency_symbol(settings.currency_symbol.clone());

    match command {
        Commands::Limit(cmd) => handle_limit_command(&mut store, cmd)?,
        Commands::Add(args) => handle_add(&mut store, &settings, args)?,
        Commands::List => handle_list(&store)?,
        Commands::Delete { number } => handle_delete(&mut store, number)?,
        Commands::Summary => handle_summary(&store)?,
        Commands::Chart => handle_chart(&store)?,
        Commands::Theme(cmd) => handle_theme_command(&mut store, cmd)?,
        Commands::Tui | Commands::Init | Commands::Config => {}
    }

    if store.has_unsaved_changes() {
        bail!(
            "changes could not be saved to {}",
            paths.storage_file().display()
        );
    }

    Ok(())
}

fn print_config(paths: &ExpensePaths, settings: &Settings) {
    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Storage file:   {}", paths.storage_file().display());
    println!("Log file:       {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:    {}", settings.currency_symbol);
    println!("  Notification time:  {}s", settings.notification_secs);
    println!("  Chart animation:    {}ms", settings.chart_animation_ms);
    println!("  Date format:        {}", settings.date_format);
    println!();
    println!("Key bindings:");
    for (action, key) in &settings.keybindings {
        println!("  {:<16} {}", action, key);
    }
    println!();
    println!("Categories:");
    for category in ExpenseCategory::ALL {
        println!("  {:<14} {}", category.name(), category.color().name());
    }
}
