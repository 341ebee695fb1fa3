//! Status bar view
//!
//! Shows the theme, the save state and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::keybindings::Action;

pub fn render<K: KeyValueStore>(frame: &mut Frame, app: &App<'_, K>, area: Rect) {
    let palette = app.palette();
    let view = app.store.surface().view();

    let mut spans = vec![
        Span::styled(" Theme: ", Style::default().fg(palette.dim)),
        Span::styled(view.theme.as_str(), Style::default().fg(palette.accent)),
    ];

    if view.unsaved {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            "Changes not saved",
            Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
        ));
    }

    let hints = [
        (Action::AddExpense, "Add"),
        (Action::DeleteExpense, "Delete"),
        (Action::SetLimit, "Limit"),
        (Action::ToggleTheme, "Theme"),
        (Action::Help, "Help"),
        (Action::Quit, "Quit"),
    ]
    .iter()
    .map(|(action, name)| format!("{}:{}", app.keymap.label(*action), name))
    .collect::<Vec<_>>()
    .join("  ");
    let hints = format!(" {} ", hints);

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.chars().count());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(palette.text)));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.panel));
    frame.render_widget(paragraph, area);
}
