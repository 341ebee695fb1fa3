//! Add-expense dialog
//!
//! Modal form with name, amount, date and category fields. Tab moves between
//! fields; on the category field Left/Right cycles through the categories.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{ExpenseCategory, ExpenseInput};
use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Name,
    Amount,
    Date,
    Category,
}

impl ExpenseField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Category,
            Self::Category => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Category,
            Self::Amount => Self::Name,
            Self::Date => Self::Amount,
            Self::Category => Self::Date,
        }
    }
}

/// State of the add-expense form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    pub focused_field: ExpenseField,
    pub name_input: TextInput,
    pub amount_input: TextInput,
    pub date_input: TextInput,
    pub category: ExpenseCategory,
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    pub fn new() -> Self {
        Self {
            focused_field: ExpenseField::Name,
            name_input: TextInput::new()
                .label("Name")
                .placeholder("What was it?")
                .focused(true),
            amount_input: TextInput::new().label("Amount").placeholder("e.g. 12.50"),
            date_input: TextInput::new().label("Date"),
            category: ExpenseCategory::default(),
            error_message: None,
        }
    }

    /// Blank form dated `today`
    pub fn reset(&mut self, today: &str) {
        *self = Self::new();
        self.date_input.set_value(today);
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    pub fn set_focus(&mut self, field: ExpenseField) {
        self.focused_field = field;
        self.name_input.focused = field == ExpenseField::Name;
        self.amount_input.focused = field == ExpenseField::Amount;
        self.date_input.focused = field == ExpenseField::Date;
    }

    /// The focused text field; `None` on the category selector
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Name => Some(&mut self.name_input),
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Date => Some(&mut self.date_input),
            ExpenseField::Category => None,
        }
    }

    /// Raw form values for the store to validate
    pub fn to_input(&self) -> ExpenseInput {
        ExpenseInput::new(
            self.name_input.value(),
            self.amount_input.value(),
            self.date_input.value(),
            Some(self.category.name()),
        )
    }
}

/// Submit the form; the dialog stays open when the store rejects it
fn save_expense<K: KeyValueStore>(app: &mut App<'_, K>) {
    let input = app.expense_form.to_input();
    match app.store.add_expense(&input) {
        Ok(outcome) => {
            app.selected_index = outcome.position;
            app.close_dialog();
        }
        Err(e) => app.expense_form.error_message = Some(e.to_string()),
    }
}

/// Handle a key while the form is open
pub fn handle_key<K: KeyValueStore>(app: &mut App<'_, K>, key: KeyEvent) {
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => save_expense(app),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Left if form.focused_field == ExpenseField::Category => {
            form.category = form.category.prev();
        }
        KeyCode::Right | KeyCode::Char(' ') if form.focused_field == ExpenseField::Category => {
            form.category = form.category.next();
        }
        code => {
            form.error_message = None;
            if let Some(input) = form.focused_input() {
                match code {
                    KeyCode::Char(c) => input.insert(c),
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_start(),
                    KeyCode::End => input.move_end(),
                    _ => {}
                }
            }
        }
    }
}

/// Render the add-expense dialog
pub fn render<K: KeyValueStore>(frame: &mut Frame, app: &App<'_, K>) {
    let palette = app.palette();
    let form = &app.expense_form;
    let area = centered_rect_fixed(60, 13, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
        .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Date
            Constraint::Length(1), // Category
            Constraint::Length(1),
            Constraint::Length(1), // Error
            Constraint::Min(1),    // Hints
        ])
        .split(inner);

    frame.render_widget(form.name_input.widget(&palette), rows[0]);
    frame.render_widget(form.amount_input.widget(&palette), rows[1]);
    frame.render_widget(form.date_input.widget(&palette), rows[2]);

    let selected = form.focused_field == ExpenseField::Category;
    let category_style = Style::default()
        .fg(palette.category(form.category.color()))
        .add_modifier(if selected {
            Modifier::BOLD | Modifier::REVERSED
        } else {
            Modifier::BOLD
        });
    let category_line = Line::from(vec![
        Span::styled("Category", Style::default().fg(palette.accent)),
        Span::styled(": ", Style::default().fg(palette.dim)),
        Span::styled("< ", Style::default().fg(palette.dim)),
        Span::styled(form.category.name(), category_style),
        Span::styled(" >", Style::default().fg(palette.dim)),
    ]);
    frame.render_widget(Paragraph::new(category_line), rows[3]);

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(palette.error))),
            rows[5],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(palette.warning)),
        Span::raw(" Next  "),
        Span::styled("[</>]", Style::default().fg(palette.warning)),
        Span::raw(" Category  "),
        Span::styled("[Enter]", Style::default().fg(palette.ok)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(palette.error)),
        Span::raw(" Cancel"),
    ])
    .style(Style::default().fg(palette.text));
    frame.render_widget(Paragraph::new(hints), rows[6]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::tui::app::test_support::app;
    use crate::tui::app::ActiveDialog;

    fn type_text<K: KeyValueStore>(app: &mut App<'_, K>, text: &str) {
        for c in text.chars() {
            handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn press<K: KeyValueStore>(app: &mut App<'_, K>, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_field_cycle() {
        let mut form = ExpenseFormState::new();
        form.next_field();
        assert_eq!(form.focused_field, ExpenseField::Amount);
        assert!(form.amount_input.focused);
        assert!(!form.name_input.focused);

        form.prev_field();
        form.prev_field();
        assert_eq!(form.focused_field, ExpenseField::Category);
        assert!(form.focused_input().is_none());
    }

    #[test]
    fn test_reset_prefills_date() {
        let mut form = ExpenseFormState::new();
        form.name_input.set_value("old");
        form.reset("2024-05-06");
        assert_eq!(form.name_input.value(), "");
        assert_eq!(form.date_input.value(), "2024-05-06");
        assert_eq!(form.category, ExpenseCategory::Food);
    }

    #[test]
    fn test_submit_adds_and_closes() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_add_expense();

        type_text(&mut app, "Cinema");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "15");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        let expense = &app.store.expenses()[0];
        assert_eq!(expense.name, "Cinema");
        assert_eq!(expense.category, ExpenseCategory::Entertainment);
    }

    #[test]
    fn test_rejected_submit_keeps_form() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_add_expense();

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "15");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
        assert!(app.expense_form.error_message.is_some());
        assert!(app.store.expenses().is_empty());
        assert!(app.has_notification());
    }

    #[test]
    fn test_escape_discards() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_add_expense();
        type_text(&mut app, "Snack");
        press(&mut app, KeyCode::Esc);

        assert!(!app.has_dialog());
        assert!(app.store.expenses().is_empty());
    }
}
