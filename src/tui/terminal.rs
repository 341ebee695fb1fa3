//! Terminal setup and teardown
//!
//! Raw mode, the alternate screen and mouse capture are switched on for the
//! lifetime of the TUI. A panic hook switches them off again before the
//! panic message is printed.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::{ExpensePaths, Settings};
use crate::services::ExpenseStore;
use crate::storage::open_file_store;

use super::app::App;
use super::event::{EventHandler, TICK_RATE};
use super::handler::handle_event;
use super::keybindings::KeyMap;
use super::surface::TuiSurface;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI until the user quits
///
/// The key map must already be validated; the store is opened here so the
/// initial load refreshes the terminal surface.
pub fn run_tui(paths: &ExpensePaths, settings: &Settings, keymap: KeyMap) -> Result<()> {
    let kv = open_file_store(paths)?;
    let surface = TuiSurface::new(settings, TICK_RATE);
    let store = ExpenseStore::open(kv, surface).with_currency_symbol(settings.currency_symbol.clone());
    let mut app = App::new(store, settings, keymap);

    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, &mut app);
    restore_terminal()?;

    result
}

fn event_loop(terminal: &mut Tui, app: &mut App<'_>) -> Result<()> {
    let events = EventHandler::new(TICK_RATE);

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        handle_event(app, events.next()?)?;

        if app.should_quit {
            break;
        }
    }

    tracing::info!("tui closed");
    Ok(())
}
