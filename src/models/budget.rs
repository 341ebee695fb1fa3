//! Budget state: the monthly limit and the display theme
//!
//! Both are process-wide scalars owned by the expense store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::{Money, MoneyParseError, MAX_AMOUNT};

/// Parse user input for the monthly limit
///
/// Zero is allowed and means "no limit". Negative or non-numeric input is
/// rejected.
pub fn parse_limit(input: &str) -> Result<Money, LimitValidationError> {
    let raw = input.trim().to_string();
    let limit = Money::parse(&raw).map_err(|e| match e {
        MoneyParseError::TooLarge(_) => LimitValidationError::TooLarge(raw.clone()),
        MoneyParseError::BelowSmallestUnit(_) => LimitValidationError::BelowSmallest(raw.clone()),
        MoneyParseError::Empty | MoneyParseError::InvalidFormat(_) => {
            LimitValidationError::NotANumber(raw.clone())
        }
    })?;
    if limit.is_negative() {
        return Err(LimitValidationError::Negative(limit));
    }
    Ok(limit)
}

/// Validation errors for the monthly limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LimitValidationError {
    NotANumber(String),
    TooLarge(String),
    BelowSmallest(String),
    Negative(Money),
}

impl fmt::Display for LimitValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(raw) => write!(f, "Please enter a valid monthly limit ('{}' is not a number)", raw),
            Self::TooLarge(raw) => write!(
                f,
                "Please enter a valid monthly limit ('{}' is above {})",
                raw, MAX_AMOUNT
            ),
            Self::BelowSmallest(raw) => write!(
                f,
                "Please enter a valid monthly limit ('{}' is below the smallest amount (0.01))",
                raw
            ),
            Self::Negative(amount) => {
                write!(f, "Please enter a valid monthly limit ({} is negative)", amount)
            }
        }
    }
}

impl std::error::Error for LimitValidationError {}

/// Display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}
