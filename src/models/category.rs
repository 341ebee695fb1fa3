//! Expense categories
//!
//! Categories are a closed set. Each one maps to a display color token; labels
//! that don't name a category share the token of [`ExpenseCategory::Other`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExpenseCategory {
    #[default]
    Food,
    Travel,
    Entertainment,
    Shopping,
    /// Also absorbs unknown labels read back from storage
    #[serde(other)]
    Other,
}

/// Display color token attached to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    CategoryFood,
    CategoryTravel,
    CategoryEntertainment,
    CategoryShopping,
    NeonBlue,
}

impl ColorToken {
    /// Token name as used by style sheets and the `config` listing
    pub fn name(&self) -> &'static str {
        match self {
            Self::CategoryFood => "category-food",
            Self::CategoryTravel => "category-travel",
            Self::CategoryEntertainment => "category-entertainment",
            Self::CategoryShopping => "category-shopping",
            Self::NeonBlue => "neon-blue",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ExpenseCategory {
    /// All categories in display order
    pub const ALL: [ExpenseCategory; 5] = [
        Self::Food,
        Self::Travel,
        Self::Entertainment,
        Self::Shopping,
        Self::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }

    /// Color token for this category
    pub fn color(&self) -> ColorToken {
        match self {
            Self::Food => ColorToken::CategoryFood,
            Self::Travel => ColorToken::CategoryTravel,
            Self::Entertainment => ColorToken::CategoryEntertainment,
            Self::Shopping => ColorToken::CategoryShopping,
            Self::Other => ColorToken::NeonBlue,
        }
    }

    /// Next category, wrapping around (used by the TUI selector)
    pub fn next(self) -> Self {
        match self {
            Self::Food => Self::Travel,
            Self::Travel => Self::Entertainment,
            Self::Entertainment => Self::Shopping,
            Self::Shopping => Self::Other,
            Self::Other => Self::Food,
        }
    }

    /// Previous category, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Self::Food => Self::Other,
            Self::Travel => Self::Food,
            Self::Entertainment => Self::Travel,
            Self::Shopping => Self::Entertainment,
            Self::Other => Self::Shopping,
        }
    }
}

/// Color token for an arbitrary label; anything unrecognized gets Other's token
pub fn color_for_label(label: &str) -> ColorToken {
    label
        .parse::<ExpenseCategory>()
        .unwrap_or(ExpenseCategory::Other)
        .color()
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(trimmed.to_string()))
    }
}

/// A label that is not one of the fixed categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}' (expected Food, Travel, Entertainment, Shopping or Other)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCategory {}
