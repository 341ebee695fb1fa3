//! Derived views over the ledger
//!
//! Pure functions, recomputed on every refresh and never stored.

use std::collections::HashMap;

use crate::models::{Expense, Money};

/// Sum of every expense amount, saturating at the `Money` bounds
pub fn total_spent(expenses: &[Expense]) -> Money {
    expenses
        .iter()
        .fold(Money::zero(), |total, e| total.saturating_add(e.amount))
}

/// Limit minus spending; goes negative once the limit is exceeded
pub fn remaining(monthly_limit: Money, expenses: &[Expense]) -> Money {
    monthly_limit.saturating_sub(total_spent(expenses))
}

/// True when a limit is set and spending is above it
pub fn is_limit_exceeded(monthly_limit: Money, expenses: &[Expense]) -> bool {
    monthly_limit.is_positive() && total_spent(expenses) > monthly_limit
}

/// Summed amount for one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTotal {
    pub date: String,
    pub amount: Money,
}

/// Per-date totals in first-seen date order
pub fn per_date_totals(expenses: &[Expense]) -> Vec<DateTotal> {
    let mut totals: Vec<DateTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for expense in expenses {
        match index.get(expense.date.as_str()) {
            Some(&slot) => {
                let amount = &mut totals[slot].amount;
                *amount = amount.saturating_add(expense.amount);
            }
            None => {
                index.insert(expense.date.as_str(), totals.len());
                totals.push(DateTotal {
                    date: expense.date.clone(),
                    amount: expense.amount,
                });
            }
        }
    }

    totals
}
