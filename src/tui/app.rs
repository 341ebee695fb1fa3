//! Application state for the TUI
//!
//! The App owns the expense store (with the terminal surface plugged in)
//! and the UI-only state: selection, open dialog and form contents.

use ratatui::layout::Rect;

use crate::cli::today;
use crate::config::Settings;
use crate::services::ExpenseStore;
use crate::storage::{FileStore, KeyValueStore};

use super::dialogs::expense::ExpenseFormState;
use super::dialogs::limit::LimitFormState;
use super::keybindings::KeyMap;
use super::surface::TuiSurface;
use super::theme::Palette;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    SetLimit,
    Help,
    /// Delete the expense at this position once confirmed
    ConfirmDelete(usize),
}

/// Main application state
pub struct App<'a, K: KeyValueStore = FileStore> {
    pub store: ExpenseStore<K, TuiSurface>,
    pub settings: &'a Settings,
    pub keymap: KeyMap,
    pub should_quit: bool,
    pub active_dialog: ActiveDialog,
    /// Highlighted row in the expense list
    pub selected_index: usize,
    pub expense_form: ExpenseFormState,
    pub limit_form: LimitFormState,
    /// Where the current notification was drawn, for mouse dismissal
    pub notification_area: Option<Rect>,
}

impl<'a, K: KeyValueStore> App<'a, K> {
    pub fn new(store: ExpenseStore<K, TuiSurface>, settings: &'a Settings, keymap: KeyMap) -> Self {
        Self {
            store,
            settings,
            keymap,
            should_quit: false,
            active_dialog: ActiveDialog::None,
            selected_index: 0,
            expense_form: ExpenseFormState::new(),
            limit_form: LimitFormState::new(),
            notification_area: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.store.theme())
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Open a blank add-expense form dated today
    pub fn open_add_expense(&mut self) {
        self.expense_form.reset(&today(self.settings));
        self.open_dialog(ActiveDialog::AddExpense);
    }

    /// Open the limit form prefilled with the current limit
    pub fn open_set_limit(&mut self) {
        let limit = self.store.monthly_limit();
        let current = if limit.is_zero() {
            String::new()
        } else {
            limit.to_decimal_string()
        };
        self.limit_form.reset(&current);
        self.open_dialog(ActiveDialog::SetLimit);
    }

    /// Ask for confirmation before deleting the highlighted expense
    pub fn request_delete(&mut self) {
        if self.selected_index < self.store.expenses().len() {
            self.open_dialog(ActiveDialog::ConfirmDelete(self.selected_index));
        }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.store.expenses().len() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection on a valid row after the list shrinks
    pub fn clamp_selection(&mut self) {
        let len = self.store.expenses().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Drop the visible notification; false when none is showing
    pub fn dismiss_notification(&mut self) -> bool {
        let dismissed = self.store.surface_mut().notifications.dismiss_current();
        if dismissed {
            self.notification_area = None;
        }
        dismissed
    }

    pub fn has_notification(&self) -> bool {
        !self.store.surface().notifications.is_empty()
    }

    pub fn on_tick(&mut self) {
        self.store.surface_mut().on_tick();
        if !self.has_notification() {
            self.notification_area = None;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::Duration;

    use super::*;
    use crate::storage::MemoryStore;

    /// App over an in-memory store with default settings
    pub fn app(settings: &Settings) -> App<'_, MemoryStore> {
        app_with(MemoryStore::new(), settings)
    }

    pub fn app_with(kv: MemoryStore, settings: &Settings) -> App<'_, MemoryStore> {
        let surface = TuiSurface::new(settings, Duration::from_millis(50));
        let store = ExpenseStore::open(kv, surface)
            .with_currency_symbol(settings.currency_symbol.clone());
        let keymap = KeyMap::from_settings(settings).unwrap();
        App::new(store, settings, keymap)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::app;
    use super::*;
    use crate::models::ExpenseInput;

    fn add(app: &mut App<'_, crate::storage::MemoryStore>, name: &str) {
        let input = ExpenseInput::new(name, "10", "2024-05-01", Some("Food"));
        app.store.add_expense(&input).unwrap();
    }

    #[test]
    fn test_selection_moves_within_bounds() {
        let settings = Settings::default();
        let mut app = app(&settings);
        add(&mut app, "A");
        add(&mut app, "B");

        app.move_up();
        assert_eq!(app.selected_index, 0);
        app.move_down();
        app.move_down();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_delete_request_needs_a_row() {
        let settings = Settings::default();
        let mut app = app(&settings);

        app.request_delete();
        assert!(!app.has_dialog());

        add(&mut app, "A");
        app.request_delete();
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmDelete(0));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let settings = Settings::default();
        let mut app = app(&settings);
        add(&mut app, "A");
        add(&mut app, "B");
        app.selected_index = 1;

        app.store.delete_expense(1);
        app.clamp_selection();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_set_limit_prefill() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_set_limit();
        assert_eq!(app.limit_form.input.value(), "");

        app.store.set_limit("250.5").unwrap();
        app.open_set_limit();
        assert_eq!(app.limit_form.input.value(), "250.50");
        assert_eq!(app.active_dialog, ActiveDialog::SetLimit);
    }
}
