//! Expense model
//!
//! One user-entered spending record. Expenses are immutable once created and
//! are identified only by their position in the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::money::{Money, MoneyParseError, MAX_AMOUNT};

/// A single expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// What the money was spent on
    pub name: String,

    /// Amount spent, always positive
    pub amount: Money,

    /// Free-form date text as entered
    pub date: String,

    pub category: ExpenseCategory,
}

/// Raw text of the four "add expense" inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseInput {
    pub name: String,
    pub amount: String,
    pub date: String,
    pub category: Option<String>,
}

impl ExpenseInput {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
        category: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            date: date.into(),
            category: category.map(str::to_string),
        }
    }
}

impl Expense {
    /// Build an expense from already-typed values, validating them
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        date: impl Into<String>,
        category: ExpenseCategory,
    ) -> Result<Self, ExpenseValidationError> {
        let expense = Self {
            name: name.into().trim().to_string(),
            amount,
            date: date.into().trim().to_string(),
            category,
        };
        expense.validate()?;
        Ok(expense)
    }

    /// Parse and validate raw form input
    pub fn from_input(input: &ExpenseInput) -> Result<Self, ExpenseValidationError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        let raw = input.amount.trim().to_string();
        let amount = Money::parse(&raw).map_err(|e| match e {
            MoneyParseError::TooLarge(_) => ExpenseValidationError::AmountTooLarge(raw.clone()),
            MoneyParseError::BelowSmallestUnit(_) => {
                ExpenseValidationError::AmountBelowSmallest(raw.clone())
            }
            MoneyParseError::Empty | MoneyParseError::InvalidFormat(_) => {
                ExpenseValidationError::InvalidAmount(raw.clone())
            }
        })?;

        let category = match input.category.as_deref().map(str::trim) {
            None | Some("") => return Err(ExpenseValidationError::MissingCategory),
            Some(label) => label
                .parse::<ExpenseCategory>()
                .map_err(|_| ExpenseValidationError::UnknownCategory(label.to_string()))?,
        };

        Self::new(name, amount, input.date.as_str(), category)
    }

    /// Check the ledger invariant for this expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        if self.date.trim().is_empty() {
            return Err(ExpenseValidationError::MissingDate);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - {} - {}",
            self.category, self.name, self.amount, self.date
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    InvalidAmount(String),
    AmountTooLarge(String),
    AmountBelowSmallest(String),
    NonPositiveAmount(Money),
    MissingDate,
    MissingCategory,
    UnknownCategory(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::InvalidAmount(raw) => write!(f, "Amount '{}' is not a number", raw),
            Self::AmountTooLarge(raw) => {
                write!(f, "Amount '{}' is too large (max {})", raw, MAX_AMOUNT)
            }
            Self::AmountBelowSmallest(raw) => {
                write!(f, "Amount '{}' is below the smallest amount (0.01)", raw)
            }
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::MissingDate => write!(f, "Expense date is required"),
            Self::MissingCategory => write!(f, "Choose a category"),
            Self::UnknownCategory(label) => write!(
                f,
                "Unknown category '{}' (expected Food, Travel, Entertainment, Shopping or Other)",
                label
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, amount: &str, date: &str, category: Option<&str>) -> ExpenseInput {
        ExpenseInput::new(name, amount, date, category)
    }

    #[test]
    fn test_from_input_trims_and_parses() {
        let expense =
            Expense::from_input(&input("  Lunch ", "12.5", " 2024-01-01 ", Some("food"))).unwrap();
        assert_eq!(expense.name, "Lunch");
        assert_eq!(expense.amount, Money::from_cents(1250));
        assert_eq!(expense.date, "2024-01-01");
        assert_eq!(expense.category, ExpenseCategory::Food);
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = Expense::from_input(&input("   ", "10", "2024-01-01", Some("Food"))).unwrap_err();
        assert_eq!(err, ExpenseValidationError::EmptyName);
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let err = Expense::from_input(&input("Lunch", "0", "2024-01-01", Some("Food"))).unwrap_err();
        assert_eq!(err, ExpenseValidationError::NonPositiveAmount(Money::zero()));

        let err = Expense::from_input(&input("Lunch", "-3", "2024-01-01", Some("Food"))).unwrap_err();
        assert!(matches!(err, ExpenseValidationError::NonPositiveAmount(_)));
    }

    #[test]
    fn test_rejects_non_numeric_amount() {
        let err = Expense::from_input(&input("Lunch", "lots", "2024-01-01", Some("Food"))).unwrap_err();
        assert_eq!(err, ExpenseValidationError::InvalidAmount("lots".into()));
    }

    #[test]
    fn test_rejects_amount_below_smallest_unit() {
        let err = Expense::from_input(&input("Gum", "0.001", "2024-01-01", Some("Food"))).unwrap_err();
        assert_eq!(err, ExpenseValidationError::AmountBelowSmallest("0.001".into()));
        assert_eq!(
            err.to_string(),
            "Amount '0.001' is below the smallest amount (0.01)"
        );
    }

    #[test]
    fn test_rejects_amount_above_max() {
        let err = Expense::from_input(&input("Yacht", "92233720368547758", "2024-01-01", Some("Travel")))
            .unwrap_err();
        assert_eq!(err, ExpenseValidationError::AmountTooLarge("92233720368547758".into()));
        assert!(err.to_string().contains("is too large"));
    }

    #[test]
    fn test_half_cent_rounds_up() {
        let expense = Expense::from_input(&input("Tea", "12.345", "2024-01-01", Some("Food"))).unwrap();
        assert_eq!(expense.amount, Money::from_cents(1235));
    }

    #[test]
    fn test_rejects_missing_date_and_category() {
        let err = Expense::from_input(&input("Lunch", "10", "", Some("Food"))).unwrap_err();
        assert_eq!(err, ExpenseValidationError::MissingDate);

        let err = Expense::from_input(&input("Lunch", "10", "2024-01-01", None)).unwrap_err();
        assert_eq!(err, ExpenseValidationError::MissingCategory);

        let err = Expense::from_input(&input("Lunch", "10", "2024-01-01", Some("Rent"))).unwrap_err();
        assert_eq!(err, ExpenseValidationError::UnknownCategory("Rent".into()));
    }

    #[test]
    fn test_date_is_free_form() {
        let expense = Expense::from_input(&input("Taxi", "4", "last tuesday", Some("Travel"))).unwrap();
        assert_eq!(expense.date, "last tuesday");
    }

    #[test]
    fn test_persisted_shape() {
        let expense =
            Expense::new("Movie", Money::from_cents(1500), "2024-02-03", ExpenseCategory::Entertainment)
                .unwrap();
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Movie",
                "amount": 15,
                "date": "2024-02-03",
                "category": "Entertainment"
            })
        );
    }
}
