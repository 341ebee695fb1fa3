//! Summary strip: limit, total spent and remaining

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::theme::Palette;

pub fn render<K: KeyValueStore>(frame: &mut Frame, app: &App<'_, K>, area: Rect) {
    let palette = app.palette();
    let symbol = app.store.currency_symbol();
    let view = app.store.surface().view();

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let limit = if view.monthly_limit.is_zero() {
        ("(not set)".to_string(), palette.dim)
    } else {
        (view.monthly_limit.format_with_symbol(symbol), palette.text)
    };
    render_card(frame, cards[0], "Monthly Limit", limit, &palette);

    let spent_color = if view.remaining.is_negative() {
        palette.error
    } else {
        palette.text
    };
    render_card(
        frame,
        cards[1],
        "Total Spent",
        (view.total_spent.format_with_symbol(symbol), spent_color),
        &palette,
    );

    let mut remaining_title = "Remaining";
    if view.unsaved {
        remaining_title = "Remaining (unsaved!)";
    }
    render_card(
        frame,
        cards[2],
        remaining_title,
        (
            view.remaining.format_with_symbol(symbol),
            remaining_color(view.remaining, &palette),
        ),
        &palette,
    );
}

fn remaining_color(remaining: Money, palette: &Palette) -> Color {
    if remaining.is_negative() {
        palette.error
    } else if remaining.is_zero() {
        palette.warning
    } else {
        palette.ok
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    (value, color): (String, Color),
    palette: &Palette,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(palette.dim))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim))
        .style(Style::default().bg(palette.panel));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    frame.render_widget(text, area);
}
