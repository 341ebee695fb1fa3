//! Delete confirmation dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// y/Enter deletes the expense at `position`; n/Esc backs out
pub fn handle_key<K: KeyValueStore>(app: &mut App<'_, K>, key: KeyEvent, position: usize) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.store.delete_expense(position);
            app.clamp_selection();
            app.close_dialog();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }
}

pub fn render<K: KeyValueStore>(frame: &mut Frame, app: &App<'_, K>, position: usize) {
    let palette = app.palette();
    let area = centered_rect_fixed(50, 7, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(Style::default().fg(palette.warning).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.warning))
        .style(Style::default().bg(palette.panel));

    let message = match app.store.expenses().get(position) {
        Some(expense) => format!(
            "Delete \"{}\" ({})?",
            expense.name,
            expense.amount.format_with_symbol(app.store.currency_symbol())
        ),
        None => "Nothing to delete.".to_string(),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(palette.text))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(palette.ok)),
            Span::styled(" Yes  ", Style::default().fg(palette.text)),
            Span::styled("[N]", Style::default().fg(palette.error)),
            Span::styled(" No", Style::default().fg(palette.text)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::ExpenseInput;
    use crate::tui::app::test_support::app;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_confirm_deletes() {
        let settings = Settings::default();
        let mut app = app(&settings);
        let input = ExpenseInput::new("Tea", "3", "2024-05-01", Some("Food"));
        app.store.add_expense(&input).unwrap();
        app.request_delete();

        handle_key(&mut app, KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE), 0);
        assert!(app.store.expenses().is_empty());
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_decline_keeps_expense() {
        let settings = Settings::default();
        let mut app = app(&settings);
        let input = ExpenseInput::new("Tea", "3", "2024-05-01", Some("Food"));
        app.store.add_expense(&input).unwrap();
        app.request_delete();

        handle_key(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), 0);
        assert_eq!(app.store.expenses().len(), 1);
        assert!(!app.has_dialog());
    }
}
