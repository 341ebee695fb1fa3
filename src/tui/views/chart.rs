//! Per-date bar chart
//!
//! Draws the animated heights held by the surface's chart state. The scale
//! is fixed to the final heights so bars do not rescale mid-animation.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::storage::KeyValueStore;
use crate::tui::app::App;

const BAR_GAP: u16 = 1;
const MAX_BAR_WIDTH: u16 = 12;

/// Widest bar that fits `count` bars and their gaps, never below one cell
fn bar_width(inner_width: u16, count: usize) -> u16 {
    let count = u16::try_from(count).unwrap_or(u16::MAX).max(1);
    let gaps = BAR_GAP.saturating_mul(count - 1);
    (inner_width.saturating_sub(gaps) / count).clamp(1, MAX_BAR_WIDTH)
}

pub fn render<K: KeyValueStore>(frame: &mut Frame, app: &App<'_, K>, area: Rect) {
    let palette = app.palette();
    let symbol = app.store.currency_symbol();
    let chart = &app.store.surface().chart;

    let block = Block::default()
        .title(" Spending by Date ")
        .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.panel));

    if chart.is_empty() {
        let text = Paragraph::new(Span::styled(
            "Nothing to chart yet.",
            Style::default().fg(palette.dim),
        ))
        .block(block);
        frame.render_widget(text, area);
        return;
    }

    let targets = chart.targets();
    let max = targets.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);
    let bars: Vec<Bar> = chart
        .values()
        .into_iter()
        .zip(targets.iter())
        .map(|((label, height), (_, target))| {
            let amount = Money::from_cents(i64::try_from(*target).unwrap_or(i64::MAX));
            Bar::default()
                .value(height)
                .label(Line::from(label))
                .text_value(amount.format_with_symbol(symbol))
        })
        .collect();

    let width = bar_width(area.width.saturating_sub(2), bars.len());

    let widget = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .max(max)
        .bar_width(width)
        .bar_gap(BAR_GAP)
        .bar_style(Style::default().fg(palette.accent))
        .value_style(
            Style::default()
                .fg(palette.background)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(palette.dim));

    frame.render_widget(widget, area);
}
