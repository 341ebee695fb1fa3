//! Render-surface contract
//!
//! The store never draws anything itself. After every load and mutation it
//! hands a freshly computed [`LedgerView`] to its surface, and it routes
//! validation failures and limit warnings through [`RenderSurface::notify`].

use crate::models::{Expense, Money, Theme};

use super::summary::{per_date_totals, remaining, total_spent, DateTotal};

/// Derived state handed to the render layer on every refresh
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerView {
    pub monthly_limit: Money,
    pub total_spent: Money,
    pub remaining: Money,
    /// Ledger in entry order; list rows are keyed by position
    pub expenses: Vec<Expense>,
    /// Chart data: one bar per distinct date
    pub per_date: Vec<DateTotal>,
    pub theme: Theme,
    /// Set while the last write to storage failed
    pub unsaved: bool,
}

impl LedgerView {
    pub fn compute(monthly_limit: Money, expenses: &[Expense], theme: Theme, unsaved: bool) -> Self {
        Self {
            monthly_limit,
            total_spent: total_spent(expenses),
            remaining: remaining(monthly_limit, expenses),
            expenses: expenses.to_vec(),
            per_date: per_date_totals(expenses),
            theme,
            unsaved,
        }
    }
}

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Rejected user input
    Error,
    /// Advisory, e.g. limit exceeded
    Warning,
}

/// A message for the notification surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }
}

/// The render layer the store drives
pub trait RenderSurface {
    /// Redraw summary, list and chart from the given view
    fn refresh(&mut self, view: &LedgerView);

    /// Show a dismissible, auto-expiring notification
    fn notify(&mut self, notice: Notice);
}

/// Surface that keeps everything it is given
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub refreshes: Vec<LedgerView>,
    pub notices: Vec<Notice>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_view(&self) -> Option<&LedgerView> {
        self.refreshes.last()
    }

    /// Notices of one kind
    pub fn notices_of(&self, kind: NoticeKind) -> Vec<&Notice> {
        self.notices.iter().filter(|n| n.kind == kind).collect()
    }
}

impl RenderSurface for RecordingSurface {
    fn refresh(&mut self, view: &LedgerView) {
        self.refreshes.push(view.clone());
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn refresh(&mut self, view: &LedgerView) {
        (**self).refresh(view);
    }

    fn notify(&mut self, notice: Notice) {
        (**self).notify(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;

    #[test]
    fn test_view_compute() {
        let expenses = vec![
            Expense::new("Taxi", Money::from_cents(700), "d1", ExpenseCategory::Travel).unwrap(),
            Expense::new("Tea", Money::from_cents(300), "d1", ExpenseCategory::Food).unwrap(),
        ];
        let view = LedgerView::compute(Money::from_cents(500), &expenses, Theme::Light, false);

        assert_eq!(view.total_spent, Money::from_cents(1000));
        assert_eq!(view.remaining, Money::from_cents(-500));
        assert_eq!(view.per_date.len(), 1);
        assert_eq!(view.expenses.len(), 2);
        assert_eq!(view.theme, Theme::Light);
    }

    #[test]
    fn test_recording_surface_filters_by_kind() {
        let mut surface = RecordingSurface::new();
        surface.notify(Notice::error("bad"));
        surface.notify(Notice::warning("careful"));

        assert_eq!(surface.notices_of(NoticeKind::Error).len(), 1);
        assert_eq!(surface.notices_of(NoticeKind::Warning)[0].message, "careful");
    }
}
