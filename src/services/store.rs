//! Expense store
//!
//! Single source of truth for the monthly limit, the expense ledger and the
//! theme flag. Every successful mutation is written through to the key-value
//! store and followed by a refresh of the render surface.

use tracing::{debug, error, info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_limit, Expense, ExpenseInput, Money, Theme, DEFAULT_CURRENCY_SYMBOL};
use crate::storage::{load_snapshot, save_snapshot, KeyValueStore};

use super::summary::{self, DateTotal};
use super::surface::{LedgerView, Notice, RenderSurface};

/// Result of a successful add
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    /// Zero-based position of the new expense
    pub position: usize,
    /// Whether the limit-exceeded warning fired
    pub limit_exceeded: bool,
}

/// Owns the budget state and mediates every read and write to storage
pub struct ExpenseStore<K: KeyValueStore, S: RenderSurface> {
    kv: K,
    surface: S,
    monthly_limit: Money,
    expenses: Vec<Expense>,
    theme: Theme,
    currency_symbol: String,
    unsaved: bool,
}

impl<K: KeyValueStore, S: RenderSurface> ExpenseStore<K, S> {
    /// Create a store with default state; call [`load`](Self::load) to hydrate it
    pub fn new(kv: K, surface: S) -> Self {
        Self {
            kv,
            surface,
            monthly_limit: Money::zero(),
            expenses: Vec::new(),
            theme: Theme::default(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            unsaved: false,
        }
    }

    /// Create and immediately load a store
    pub fn open(kv: K, surface: S) -> Self {
        let mut store = Self::new(kv, surface);
        store.load();
        store
    }

    /// Use a different currency symbol in notices
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Read limit, ledger and theme from storage and refresh the view
    ///
    /// Never fails: unreadable or malformed values fall back to defaults.
    pub fn load(&mut self) {
        let snapshot = load_snapshot(&self.kv);
        self.monthly_limit = snapshot.monthly_limit;
        self.expenses = snapshot.expenses;
        self.theme = snapshot.theme;
        self.unsaved = false;

        info!(
            expenses = self.expenses.len(),
            limit = %self.monthly_limit.to_decimal_string(),
            "loaded budget"
        );
        self.refresh();
    }

    /// Replace the monthly limit from user input
    ///
    /// Negative or non-numeric input is rejected and reported through the
    /// notification surface; state is left unchanged.
    pub fn set_limit(&mut self, input: &str) -> ExpenseResult<Money> {
        let limit = match parse_limit(input) {
            Ok(limit) => limit,
            Err(e) => return Err(self.reject(e.to_string())),
        };

        self.monthly_limit = limit;
        debug!(limit = %limit.to_decimal_string(), "monthly limit set");
        self.persist();
        self.refresh();
        Ok(limit)
    }

    /// Append a new expense from raw form input
    pub fn add_expense(&mut self, input: &ExpenseInput) -> ExpenseResult<AddOutcome> {
        let expense = match Expense::from_input(input) {
            Ok(expense) => expense,
            Err(e) => return Err(self.reject(e.to_string())),
        };
        self.push_expense(expense)
    }

    /// Append an already-typed expense
    pub fn add(&mut self, expense: Expense) -> ExpenseResult<AddOutcome> {
        if let Err(e) = expense.validate() {
            return Err(self.reject(e.to_string()));
        }
        self.push_expense(expense)
    }

    fn push_expense(&mut self, expense: Expense) -> ExpenseResult<AddOutcome> {
        debug!(name = %expense.name, amount = %expense.amount.to_decimal_string(), "adding expense");
        self.expenses.push(expense);
        let position = self.expenses.len() - 1;

        self.persist();
        self.refresh();
        let limit_exceeded = self.limit_exceeded_check();

        Ok(AddOutcome {
            position,
            limit_exceeded,
        })
    }

    /// Remove the expense at a zero-based position
    ///
    /// Positions past the end are a no-op: nothing is removed or written and
    /// `None` is returned.
    pub fn delete_expense(&mut self, position: usize) -> Option<Expense> {
        if position >= self.expenses.len() {
            warn!(
                position,
                len = self.expenses.len(),
                "ignoring delete of stale position"
            );
            return None;
        }

        let removed = self.expenses.remove(position);
        debug!(position, name = %removed.name, "deleted expense");
        self.persist();
        self.refresh();
        Some(removed)
    }

    /// Warn once if spending is above a set limit; never changes state
    pub fn limit_exceeded_check(&mut self) -> bool {
        if !summary::is_limit_exceeded(self.monthly_limit, &self.expenses) {
            return false;
        }

        let message = format!(
            "You've exceeded your monthly limit of {}!",
            self.monthly_limit.format_with_symbol(&self.currency_symbol)
        );
        info!(total = %self.total_spent().to_decimal_string(), "limit exceeded");
        self.surface.notify(Notice::warning(message));
        true
    }

    /// Flip between dark and light display
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!(theme = %self.theme, "theme toggled");
        self.persist();
        self.refresh();
        self.theme
    }

    pub fn monthly_limit(&self) -> Money {
        self.monthly_limit
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn total_spent(&self) -> Money {
        summary::total_spent(&self.expenses)
    }

    pub fn remaining(&self) -> Money {
        summary::remaining(self.monthly_limit, &self.expenses)
    }

    pub fn per_date_totals(&self) -> Vec<DateTotal> {
        summary::per_date_totals(&self.expenses)
    }

    /// True while the in-memory state differs from what storage holds
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Current derived view
    pub fn view(&self) -> LedgerView {
        LedgerView::compute(self.monthly_limit, &self.expenses, self.theme, self.unsaved)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn storage(&self) -> &K {
        &self.kv
    }

    /// Report rejected input and hand back the matching error
    fn reject(&mut self, message: String) -> ExpenseError {
        debug!(%message, "rejected input");
        self.surface.notify(Notice::error(message.clone()));
        ExpenseError::Validation(message)
    }

    fn persist(&mut self) {
        match save_snapshot(&mut self.kv, self.monthly_limit, &self.expenses, self.theme) {
            Ok(()) => self.unsaved = false,
            Err(e) => {
                error!(error = %e, "failed to save budget, keeping changes in memory");
                self.unsaved = true;
            }
        }
    }

    fn refresh(&mut self) {
        let view = self.view();
        self.surface.refresh(&view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, MAX_AMOUNT};
    use crate::services::surface::{NoticeKind, RecordingSurface};
    use crate::storage::{MemoryStore, EXPENSES_KEY};

    type TestStore = ExpenseStore<MemoryStore, RecordingSurface>;

    fn store() -> TestStore {
        ExpenseStore::open(MemoryStore::new(), RecordingSurface::new())
    }

    fn input(name: &str, amount: &str, date: &str) -> ExpenseInput {
        ExpenseInput::new(name, amount, date, Some("Food"))
    }

    /// Simulate a page reload from whatever was persisted
    fn reload(store: &TestStore) -> TestStore {
        ExpenseStore::open(store.storage().clone(), RecordingSurface::new())
    }

    #[test]
    fn test_load_defaults_and_refreshes() {
        let store = store();
        assert_eq!(store.monthly_limit(), Money::zero());
        assert!(store.expenses().is_empty());
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(store.surface().refreshes.len(), 1);
    }

    #[test]
    fn test_set_limit_round_trips_through_reload() {
        let mut store = store();
        store.set_limit("250.40").unwrap();

        let reloaded = reload(&store);
        assert_eq!(reloaded.monthly_limit(), Money::from_cents(25040));
    }

    #[test]
    fn test_negative_limit_rejected() {
        let mut store = store();
        store.set_limit("100").unwrap();
        let writes = store.storage().write_count();

        let err = store.set_limit("-5").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.monthly_limit(), Money::from_cents(10000));
        assert_eq!(store.storage().write_count(), writes);
        assert_eq!(store.surface().notices_of(NoticeKind::Error).len(), 1);
    }

    #[test]
    fn test_non_numeric_limit_rejected() {
        let mut store = store();
        assert!(store.set_limit("lots").is_err());
        assert_eq!(store.monthly_limit(), Money::zero());
    }

    #[test]
    fn test_add_rejects_bad_input_without_mutation() {
        let mut store = store();
        assert!(store.add_expense(&input("", "10", "2024-01-01")).is_err());
        assert!(store.add_expense(&input("Lunch", "0", "2024-01-01")).is_err());
        assert!(store.add_expense(&input("Lunch", "10", "")).is_err());
        assert!(store
            .add_expense(&ExpenseInput::new("Lunch", "10", "2024-01-01", None))
            .is_err());

        assert!(store.expenses().is_empty());
        assert_eq!(store.storage().write_count(), 0);
        assert_eq!(store.surface().notices_of(NoticeKind::Error).len(), 4);
    }

    #[test]
    fn test_total_is_sum_of_adds() {
        let mut store = store();
        for amount in ["10.25", "3", "0.75", "100"] {
            store.add_expense(&input("Item", amount, "2024-01-01")).unwrap();
        }
        assert_eq!(store.total_spent(), Money::from_cents(11400));
        assert_eq!(store.surface().last_view().unwrap().total_spent, Money::from_cents(11400));
    }

    #[test]
    fn test_adds_round_trip_in_order() {
        let mut store = store();
        store.add_expense(&input("Lunch", "12.50", "2024-01-01")).unwrap();
        store
            .add_expense(&ExpenseInput::new("Bus", "2", "2024-01-02", Some("Travel")))
            .unwrap();
        store.add_expense(&input("Lunch", "12.50", "2024-01-01")).unwrap();

        let reloaded = reload(&store);
        assert_eq!(reloaded.expenses(), store.expenses());
        assert_eq!(reloaded.expenses()[1].category, ExpenseCategory::Travel);
    }

    #[test]
    fn test_out_of_range_delete_is_a_no_op() {
        let mut store = store();
        store.add_expense(&input("A", "1", "d")).unwrap();
        store.add_expense(&input("B", "2", "d")).unwrap();

        assert_eq!(store.delete_expense(1).unwrap().name, "B");
        let writes = store.storage().write_count();

        assert!(store.delete_expense(1).is_none());
        assert!(store.delete_expense(usize::MAX).is_none());
        assert_eq!(store.expenses().len(), 1);
        assert_eq!(store.expenses()[0].name, "A");
        assert_eq!(store.storage().write_count(), writes);
    }

    #[test]
    fn test_delete_persists() {
        let mut store = store();
        store.add_expense(&input("A", "1", "d")).unwrap();
        store.add_expense(&input("B", "2", "d")).unwrap();
        store.delete_expense(0);

        let reloaded = reload(&store);
        assert_eq!(reloaded.expenses().len(), 1);
        assert_eq!(reloaded.expenses()[0].name, "B");
    }

    #[test]
    fn test_one_warning_per_add_over_limit() {
        let mut store = store();
        store.set_limit("100").unwrap();
        store.add_expense(&input("Rent share", "150", "d1")).unwrap();
        let before = store.surface().notices_of(NoticeKind::Warning).len();
        assert_eq!(before, 1);

        let outcome = store.add_expense(&input("Snack", "1", "d2")).unwrap();
        assert!(outcome.limit_exceeded);
        assert_eq!(outcome.position, 1);

        let warnings = store.surface().notices_of(NoticeKind::Warning);
        assert_eq!(warnings.len(), before + 1);
        assert_eq!(warnings[1].message, "You've exceeded your monthly limit of ₹100.00!");
    }

    #[test]
    fn test_no_warning_without_limit() {
        let mut store = store();
        let outcome = store.add_expense(&input("Big", "9999", "d")).unwrap();
        assert!(!outcome.limit_exceeded);
        assert!(store.surface().notices.is_empty());
    }

    #[test]
    fn test_warning_uses_configured_symbol() {
        let mut store = ExpenseStore::open(MemoryStore::new(), RecordingSurface::new())
            .with_currency_symbol("$");
        store.set_limit("5").unwrap();
        store.add_expense(&input("Book", "6", "d")).unwrap();
        assert_eq!(
            store.surface().notices[0].message,
            "You've exceeded your monthly limit of $5.00!"
        );
    }

    #[test]
    fn test_failed_write_keeps_memory_authoritative() {
        let mut store = store();
        store.add_expense(&input("Kept", "5", "d")).unwrap();

        let mut kv = store.storage().clone();
        kv.fail_writes(true);
        let mut failing = ExpenseStore::open(kv, RecordingSurface::new());
        failing.add_expense(&input("Unsaved", "7", "d")).unwrap();

        assert_eq!(failing.expenses().len(), 2);
        assert!(failing.has_unsaved_changes());
        assert!(failing.surface().last_view().unwrap().unsaved);
        assert_eq!(reload(&failing).expenses().len(), 1);
    }

    #[test]
    fn test_malformed_ledger_loads_empty() {
        let kv = MemoryStore::new().with_value(EXPENSES_KEY, "[{\"broken\": true}]");
        let store = ExpenseStore::open(kv, RecordingSurface::new());
        assert!(store.expenses().is_empty());
        assert!(store.surface().notices.is_empty());
    }

    #[test]
    fn test_oversized_adds_are_rejected_without_overflow() {
        let mut store = store();
        for _ in 0..2 {
            let err = store
                .add_expense(&input("A", "92233720368547758", "2024-01-01"))
                .unwrap_err();
            assert!(err.is_validation());
        }
        assert!(store.expenses().is_empty());
        assert!(store.surface().notices[0].message.contains("is too large"));

        store.add_expense(&input("A", "1000000000000", "2024-01-01")).unwrap();
        store.add_expense(&input("B", "1000000000000", "2024-01-01")).unwrap();
        assert_eq!(store.total_spent(), Money::from_cents(2 * MAX_AMOUNT.cents()));
    }

    #[test]
    fn test_oversized_stored_amounts_load_without_overflow() {
        let raw = r#"[
            {"name": "A", "amount": 9e16, "date": "2024-01-01", "category": "Food"},
            {"name": "B", "amount": 9e16, "date": "2024-01-01", "category": "Food"},
            {"name": "C", "amount": 4, "date": "2024-01-02", "category": "Food"}
        ]"#;
        let kv = MemoryStore::new().with_value(EXPENSES_KEY, raw);
        let store = ExpenseStore::open(kv, RecordingSurface::new());

        assert_eq!(store.expenses().len(), 1);
        assert_eq!(store.expenses()[0].name, "C");
        assert_eq!(store.surface().last_view().unwrap().total_spent, Money::from_cents(400));
    }

    #[test]
    fn test_sub_cent_add_gets_its_own_message() {
        let mut store = store();
        let err = store.add_expense(&input("Gum", "0.001", "2024-01-01")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            store.surface().notices[0].message,
            "Amount '0.001' is below the smallest amount (0.01)"
        );

        store.add_expense(&input("Tea", "12.345", "2024-01-01")).unwrap();
        assert_eq!(store.expenses()[0].amount, Money::from_cents(1235));
        assert_eq!(reload(&store).expenses()[0].amount, Money::from_cents(1235));
    }

    #[test]
    fn test_theme_toggle_persists() {
        let mut store = store();
        assert_eq!(store.toggle_theme(), Theme::Light);
        assert_eq!(reload(&store).theme(), Theme::Light);
        assert_eq!(store.toggle_theme(), Theme::Dark);
    }

    #[test]
    fn test_every_mutation_refreshes() {
        let mut store = store();
        store.set_limit("10").unwrap();
        store.add_expense(&input("A", "1", "d")).unwrap();
        store.delete_expense(0);
        store.toggle_theme();
        assert_eq!(store.surface().refreshes.len(), 5);
    }

    #[test]
    fn test_per_date_totals_follow_ledger() {
        let mut store = store();
        store.add_expense(&input("A", "10", "d1")).unwrap();
        store.add_expense(&input("B", "5", "d2")).unwrap();
        store.add_expense(&input("C", "3", "d1")).unwrap();

        let totals = store.per_date_totals();
        assert_eq!(totals[0].date, "d1");
        assert_eq!(totals[0].amount, Money::from_cents(1300));
        assert_eq!(totals[1].amount, Money::from_cents(500));
    }
}
