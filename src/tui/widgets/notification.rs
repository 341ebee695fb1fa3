//! Toast notifications
//!
//! Notices from the store land in a queue. The front one is drawn in the
//! top-right corner until it expires or the user dismisses it.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::services::{Notice, NoticeKind};
use crate::tui::theme::Palette;

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NoticeKind,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(notice: Notice, duration: Duration) -> Self {
        Self {
            message: notice.message,
            kind: notice.kind,
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Error => " x Error ",
            NoticeKind::Warning => " ! Warning ",
        }
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
    palette: &'a Palette,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification, palette: &'a Palette) -> Self {
        Self {
            notification,
            palette,
        }
    }

    /// Where the toast goes inside `area`
    pub fn area_within(area: Rect) -> Rect {
        let width = 44.min(area.width);
        let height = 6.min(area.height);
        Rect::new(
            area.x + area.width.saturating_sub(width + 1),
            area.y + 1.min(area.height.saturating_sub(height)),
            width,
            height,
        )
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = match self.notification.kind {
            NoticeKind::Error => self.palette.error,
            NoticeKind::Warning => self.palette.warning,
        };

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(self.notification.title())
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(self.palette.panel));

        let lines = vec![
            Line::from(Span::styled(
                self.notification.message.as_str(),
                Style::default().fg(self.palette.text),
            )),
            Line::from(Span::styled(
                "Enter/Space/click to dismiss",
                Style::default().fg(self.palette.dim),
            )),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

/// Pending notifications, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn remove_expired(&mut self) {
        self.remove_expired_at(Instant::now());
    }

    pub fn remove_expired_at(&mut self, now: Instant) {
        self.notifications.retain(|n| !n.is_expired_at(now));
    }

    /// The notification on screen, if any
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    /// Drop the notification on screen; returns false when there was none
    pub fn dismiss_current(&mut self) -> bool {
        if self.notifications.is_empty() {
            false
        } else {
            self.notifications.remove(0);
            true
        }
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(message: &str, secs: u64) -> Notification {
        Notification::new(Notice::warning(message), Duration::from_secs(secs))
    }

    #[test]
    fn test_queue_order_and_dismiss() {
        let mut queue = NotificationQueue::new();
        assert!(!queue.dismiss_current());

        queue.push(toast("First", 5));
        queue.push(toast("Second", 5));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "First");

        assert!(queue.dismiss_current());
        assert_eq!(queue.current().unwrap().message, "Second");
    }

    #[test]
    fn test_expiry() {
        let mut queue = NotificationQueue::new();
        queue.push(toast("Short", 1));
        queue.push(toast("Long", 10));

        let later = Instant::now() + Duration::from_secs(5);
        queue.remove_expired_at(later);

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().message, "Long");
    }

    #[test]
    fn test_kind_carried_from_notice() {
        let n = Notification::new(Notice::error("bad"), Duration::from_secs(5));
        assert_eq!(n.kind, NoticeKind::Error);
        assert!(!n.is_expired());
    }

    #[test]
    fn test_area_stays_inside() {
        let outer = Rect::new(0, 0, 30, 4);
        let area = NotificationWidget::area_within(outer);
        assert!(area.right() <= outer.right());
        assert!(area.bottom() <= outer.bottom());
    }
}
