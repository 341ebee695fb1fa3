//! Monthly limit dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

#[derive(Debug, Clone)]
pub struct LimitFormState {
    pub input: TextInput,
    pub error_message: Option<String>,
}

impl Default for LimitFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl LimitFormState {
    pub fn new() -> Self {
        Self {
            input: TextInput::new()
                .label("Limit")
                .placeholder("e.g. 5000")
                .focused(true),
            error_message: None,
        }
    }

    pub fn reset(&mut self, current: &str) {
        *self = Self::new();
        self.input.set_value(current);
    }
}

pub fn handle_key<K: KeyValueStore>(app: &mut App<'_, K>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => {
            let text = app.limit_form.input.value().to_string();
            match app.store.set_limit(&text) {
                Ok(_) => app.close_dialog(),
                Err(e) => app.limit_form.error_message = Some(e.to_string()),
            }
        }
        code => {
            let form = &mut app.limit_form;
            form.error_message = None;
            match code {
                KeyCode::Char(c) => form.input.insert(c),
                KeyCode::Backspace => form.input.backspace(),
                KeyCode::Delete => form.input.delete(),
                KeyCode::Left => form.input.move_left(),
                KeyCode::Right => form.input.move_right(),
                KeyCode::Home => form.input.move_start(),
                KeyCode::End => form.input.move_end(),
                _ => {}
            }
        }
    }
}

pub fn render<K: KeyValueStore>(frame: &mut Frame, app: &App<'_, K>) {
    let palette = app.palette();
    let area = centered_rect_fixed(44, 8, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Monthly Limit ")
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
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    frame.render_widget(app.limit_form.input.widget(&palette), rows[0]);

    if let Some(ref error) = app.limit_form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(palette.error))),
            rows[1],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(palette.ok)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(palette.error)),
        Span::raw(" Cancel"),
    ])
    .style(Style::default().fg(palette.text));
    frame.render_widget(Paragraph::new(hints), rows[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Money;
    use crate::tui::app::test_support::app;
    use crate::tui::app::ActiveDialog;
    use crossterm::event::KeyModifiers;

    fn press<K: KeyValueStore>(app: &mut App<'_, K>, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_save_limit() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_set_limit();
        for c in "300".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(app.store.monthly_limit(), Money::from_cents(30000));
    }

    #[test]
    fn test_negative_limit_rejected() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_set_limit();
        for c in "-5".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::SetLimit);
        assert!(app.limit_form.error_message.is_some());
        assert_eq!(app.store.monthly_limit(), Money::zero());
    }
}
