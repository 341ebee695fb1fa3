//! Event handler for the TUI
//!
//! Routes keyboard and mouse events to the open dialog or the main screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;
use super::keybindings::Action;
use super::layout;

/// Handle an incoming event
pub fn handle_event<K: KeyValueStore>(app: &mut App<'_, K>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Tick => app.on_tick(),
        Event::Resize(_, _) => {}
    }
    Ok(())
}

fn handle_key_event<K: KeyValueStore>(app: &mut App<'_, K>, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.active_dialog {
        ActiveDialog::None => handle_main_key(app, key),
        ActiveDialog::AddExpense => dialogs::expense::handle_key(app, key),
        ActiveDialog::SetLimit => dialogs::limit::handle_key(app, key),
        ActiveDialog::Help => dialogs::help::handle_key(app, key),
        ActiveDialog::ConfirmDelete(position) => dialogs::confirm::handle_key(app, key, position),
    }
}

fn handle_main_key<K: KeyValueStore>(app: &mut App<'_, K>, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) && app.dismiss_notification() {
        return;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        _ => {
            if let Some(action) = app.keymap.action_for(&key) {
                perform(app, action);
            }
        }
    }
}

/// Run a bound action from the main screen
pub fn perform<K: KeyValueStore>(app: &mut App<'_, K>, action: Action) {
    match action {
        Action::Quit => app.quit(),
        Action::Help => app.open_dialog(ActiveDialog::Help),
        Action::AddExpense => app.open_add_expense(),
        Action::SetLimit => app.open_set_limit(),
        Action::DeleteExpense => app.request_delete(),
        Action::ToggleTheme => {
            app.store.toggle_theme();
        }
    }
}

fn handle_mouse_event<K: KeyValueStore>(app: &mut App<'_, K>, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let on_toast = app
                .notification_area
                .is_some_and(|area| layout::contains(area, mouse.column, mouse.row));
            if on_toast {
                app.dismiss_notification();
            }
        }
        MouseEventKind::ScrollDown if !app.has_dialog() => app.move_down(),
        MouseEventKind::ScrollUp if !app.has_dialog() => app.move_up(),
        _ => {}
    }
}
