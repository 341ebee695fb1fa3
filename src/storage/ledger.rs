//! Persisted layout of the budget and the expense ledger
//!
//! Three keys are stored:
//! - `monthlyLimit`: decimal number as text
//! - `expenses`: JSON array of `{name, amount, date, category}`
//! - `theme`: `dark` or `light`

use tracing::warn;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money, Theme};

use super::kv::KeyValueStore;

pub const MONTHLY_LIMIT_KEY: &str = "monthlyLimit";
pub const EXPENSES_KEY: &str = "expenses";
pub const THEME_KEY: &str = "theme";

/// Everything the store persists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub monthly_limit: Money,
    pub expenses: Vec<Expense>,
    pub theme: Theme,
}

/// Decode the stored limit; absent means zero
pub fn decode_limit(raw: Option<&str>) -> ExpenseResult<Money> {
    let Some(raw) = raw else {
        return Ok(Money::zero());
    };

    let limit = Money::parse(raw).map_err(|e| ExpenseError::Corrupted {
        key: MONTHLY_LIMIT_KEY,
        reason: e.to_string(),
    })?;

    if limit.is_negative() {
        return Err(ExpenseError::Corrupted {
            key: MONTHLY_LIMIT_KEY,
            reason: format!("negative limit {}", raw),
        });
    }
    Ok(limit)
}

/// Decode the stored ledger; absent means empty
///
/// The value must be a JSON array. Entries that do not decode (unknown
/// shape, amount out of range) or that break the ledger invariant (blank
/// name or date, non-positive amount) are dropped individually.
pub fn decode_expenses(raw: Option<&str>) -> ExpenseResult<Vec<Expense>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let entries: Vec<serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| ExpenseError::Corrupted {
            key: EXPENSES_KEY,
            reason: e.to_string(),
        })?;

    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            let decoded = serde_json::from_value::<Expense>(entry)
                .map_err(|e| e.to_string())
                .and_then(|expense| expense.validate().map(|()| expense).map_err(|e| e.to_string()));
            match decoded {
                Ok(expense) => Some(expense),
                Err(error) => {
                    warn!(position, %error, "dropping invalid stored expense");
                    None
                }
            }
        })
        .collect())
}

pub fn decode_theme(raw: Option<&str>) -> Theme {
    raw.and_then(|value| value.parse().ok()).unwrap_or_default()
}

pub fn encode_limit(limit: Money) -> String {
    limit.to_decimal_string()
}

pub fn encode_expenses(expenses: &[Expense]) -> ExpenseResult<String> {
    serde_json::to_string(expenses)
        .map_err(|e| ExpenseError::Storage(format!("Failed to serialize expenses: {}", e)))
}

/// Read everything, degrading each part to its default on failure
pub fn load_snapshot<K: KeyValueStore>(kv: &K) -> LedgerSnapshot {
    let monthly_limit = kv
        .get(MONTHLY_LIMIT_KEY)
        .and_then(|raw| decode_limit(raw.as_deref()))
        .unwrap_or_else(|e| {
            warn!(error = %e, "falling back to no monthly limit");
            Money::zero()
        });

    let expenses = kv
        .get(EXPENSES_KEY)
        .and_then(|raw| decode_expenses(raw.as_deref()))
        .unwrap_or_else(|e| {
            warn!(error = %e, "falling back to an empty ledger");
            Vec::new()
        });

    let theme = match kv.get(THEME_KEY) {
        Ok(raw) => decode_theme(raw.as_deref()),
        Err(e) => {
            warn!(error = %e, "falling back to the default theme");
            Theme::default()
        }
    };

    LedgerSnapshot {
        monthly_limit,
        expenses,
        theme,
    }
}

/// Write limit, ledger and theme as one replace
pub fn save_snapshot<K: KeyValueStore>(
    kv: &mut K,
    monthly_limit: Money,
    expenses: &[Expense],
    theme: Theme,
) -> ExpenseResult<()> {
    let entries = [
        (MONTHLY_LIMIT_KEY, encode_limit(monthly_limit)),
        (EXPENSES_KEY, encode_expenses(expenses)?),
        (THEME_KEY, theme.as_str().to_string()),
    ];
    kv.set_all(&entries)
}
