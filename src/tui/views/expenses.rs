//! Expense list
//!
//! One row per expense in entry order. The category tag is drawn in the
//! category's colour.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::keybindings::Action;

pub fn render<K: KeyValueStore>(frame: &mut Frame, app: &App<'_, K>, area: Rect) {
    let palette = app.palette();
    let symbol = app.store.currency_symbol();
    let view = app.store.surface().view();

    let block = Block::default()
        .title(format!(" Expenses ({}) ", view.expenses.len()))
        .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.panel));

    if view.expenses.is_empty() {
        let hint = format!(
            "No expenses yet. Press {} to add one.",
            app.keymap.label(Action::AddExpense)
        );
        let text = Paragraph::new(Span::styled(hint, Style::default().fg(palette.dim))).block(block);
        frame.render_widget(text, area);
        return;
    }

    let name_width = view
        .expenses
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .min(24);

    let items: Vec<ListItem> = view
        .expenses
        .iter()
        .map(|expense| {
            let name: String = expense.name.chars().take(name_width).collect();
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<10} ", expense.date), Style::default().fg(palette.dim)),
                Span::styled(
                    format!("{:<width$} ", name, width = name_width),
                    Style::default().fg(palette.text),
                ),
                Span::styled(
                    format!("{:>12} ", expense.amount.format_with_symbol(symbol)),
                    Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    expense.category.name(),
                    Style::default().fg(palette.category(expense.category.color())),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(palette.background).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}
