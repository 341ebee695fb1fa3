//! TUI views
//!
//! The main screen: summary strip, expense list, per-date chart and status
//! bar, with any open dialog and the current notification drawn on top.

pub mod chart;
pub mod expenses;
pub mod status_bar;
pub mod summary;

use ratatui::{style::Style, widgets::Block, Frame};

use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render<K: KeyValueStore>(frame: &mut Frame, app: &mut App<'_, K>) {
    let palette = app.palette();
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let layout = AppLayout::new(area);
    summary::render(frame, app, layout.summary);
    expenses::render(frame, app, layout.list);
    chart::render(frame, app, layout.chart);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app),
        ActiveDialog::SetLimit => dialogs::limit::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::ConfirmDelete(position) => dialogs::confirm::render(frame, app, position),
    }

    // Notifications sit above dialogs so a rejected form still shows why
    app.notification_area = match app.store.surface().notifications.current() {
        Some(notification) => {
            let toast_area = NotificationWidget::area_within(area);
            frame.render_widget(NotificationWidget::new(notification, &palette), toast_area);
            Some(toast_area)
        }
        None => None,
    };
}
