//! Help dialog
//!
//! Lists the configured key bindings plus the fixed navigation keys.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::keybindings::Action;
use crate::tui::layout::centered_rect;
use crate::tui::theme::Palette;

pub fn handle_key<K: KeyValueStore>(app: &mut App<'_, K>, key: KeyEvent) {
    let closes = matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q'))
        || app.keymap.action_for(&key) == Some(Action::Help);
    if closes {
        app.close_dialog();
    }
}

/// Render the help dialog
pub fn render<K: KeyValueStore>(frame: &mut Frame, app: &App<'_, K>) {
    let palette = app.palette();
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.panel));

    let paragraph = Paragraph::new(help_lines(app, &palette))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines<K: KeyValueStore>(app: &App<'_, K>, palette: &Palette) -> Vec<Line<'static>> {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default().fg(palette.warning).add_modifier(Modifier::BOLD),
        ))
    };

    let mut lines = vec![heading("Actions"), Line::from("")];
    for action in Action::ALL {
        lines.push(key_line(&app.keymap.label(action), action.description(), palette));
    }

    lines.push(Line::from(""));
    lines.push(heading("Navigation"));
    lines.push(Line::from(""));
    lines.push(key_line("j/k", "Move selection down/up", palette));
    lines.push(key_line("Enter/Space", "Dismiss notification", palette));
    lines.push(key_line("Ctrl+C", "Quit immediately", palette));

    lines.push(Line::from(""));
    lines.push(heading("In forms"));
    lines.push(Line::from(""));
    lines.push(key_line("Tab", "Next field", palette));
    lines.push(key_line("Left/Right", "Cycle category", palette));
    lines.push(key_line("Enter", "Save", palette));
    lines.push(key_line("Esc", "Cancel", palette));

    lines
}

fn key_line(key: &str, description: &'static str, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(palette.accent)),
        Span::raw("  "),
        Span::styled(description, Style::default().fg(palette.text)),
    ])
}
