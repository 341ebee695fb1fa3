//! Money type for representing currency amounts
//!
//! Internally stores amounts in hundredths (i64) to avoid floating-point
//! drift when summing. Persisted as a plain decimal number in currency units.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Currency symbol used when no setting overrides it
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Largest amount accepted from input or storage: one trillion currency units
pub const MAX_AMOUNT: Money = Money(100_000_000_000_000);

/// Represents a monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and hundredths
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the hundredths portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Amount in currency units as a float, for charting and persistence
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Convert a decimal amount in currency units
    ///
    /// Goes through the shortest decimal text of `value`, so stored numbers
    /// round exactly like typed ones. Returns `None` for non-finite values and
    /// anything beyond [`MAX_AMOUNT`].
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        match Self::parse(&value.to_string()) {
            Ok(amount) => Some(amount),
            Err(MoneyParseError::BelowSmallestUnit(_)) => Some(Self::zero()),
            Err(_) => None,
        }
    }

    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "₹10.50", "$10.50", "10", ".5".
    /// Rounds half away from zero to the hundredth. Nonzero input that rounds
    /// to zero and magnitudes above [`MAX_AMOUNT`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        if input.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let (negative, rest) = match input.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, input),
        };

        let rest = rest
            .strip_prefix(DEFAULT_CURRENCY_SYMBOL)
            .or_else(|| rest.strip_prefix('$'))
            .unwrap_or(rest)
            .trim_start();

        let (units_str, cents_str) = match rest.split_once('.') {
            Some((units, cents)) => (units, cents),
            None => (rest, ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(units_str) || !all_digits(cents_str) {
            return Err(invalid());
        }
        if units_str.is_empty() && cents_str.is_empty() {
            return Err(invalid());
        }

        let too_large = || MoneyParseError::TooLarge(input.to_string());

        // Only digits remain, so a failed parse means the value overflowed
        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str.parse().map_err(|_| too_large())?
        };

        let digit = |i: usize| {
            cents_str
                .as_bytes()
                .get(i)
                .map_or(0, |b| i64::from(b - b'0'))
        };
        let round_up = i64::from(digit(2) >= 5);
        let cents = digit(0) * 10 + digit(1) + round_up;

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(too_large)?;
        if total > MAX_AMOUNT.0 {
            return Err(too_large());
        }
        if total == 0 && rest.bytes().any(|b| matches!(b, b'1'..=b'9')) {
            return Err(MoneyParseError::BelowSmallestUnit(input.to_string()));
        }

        Ok(Self(if negative { -total } else { total }))
    }

    /// Plain decimal text without a symbol, e.g. "12.50"
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.cents_part() == 0 {
            serializer.serialize_i64(self.units())
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value)
            .ok_or_else(|| serde::de::Error::custom(format!("amount out of range: {}", value)))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.saturating_sub(other)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = self.saturating_sub(other);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    TooLarge(String),
    BelowSmallestUnit(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "No amount given"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Not a number: {}", s),
            MoneyParseError::TooLarge(s) => {
                write!(f, "Amount {} is too large (max {})", s, MAX_AMOUNT)
            }
            MoneyParseError::BelowSmallestUnit(s) => {
                write!(f, "Amount {} is below the smallest amount (0.01)", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display_uses_rupee_symbol() {
        assert_eq!(Money::from_cents(1050).to_string(), "₹10.50");
        assert_eq!(Money::from_cents(0).to_string(), "₹0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-₹10.50");
        assert_eq!(Money::from_cents(5).to_string(), "₹0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(123456).format_with_symbol("$"), "$1234.56");
        assert_eq!(Money::from_cents(-50).format_with_symbol("€"), "-€0.50");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(10000).to_decimal_string(), "100.00");
        assert_eq!(Money::from_cents(-7).to_decimal_string(), "-0.07");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("₹10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse(" 0.05 ").unwrap().cents(), 5);
        assert_eq!(Money::parse("1.999").unwrap().cents(), 200);
        assert_eq!(Money::parse("12.344").unwrap().cents(), 1234);
        assert_eq!(Money::parse("12.345").unwrap().cents(), 1235);
        assert_eq!(Money::parse("-12.345").unwrap().cents(), -1235);
        assert_eq!(Money::parse("0.995").unwrap().cents(), 100);
    }

    #[test]
    fn test_parse_and_from_f64_round_alike() {
        for text in ["12.345", "0.015", "1.999", "7.1249", "0.005"] {
            let typed = Money::parse(text).unwrap();
            let stored = Money::from_f64(text.parse().unwrap()).unwrap();
            assert_eq!(typed, stored, "{}", text);
        }
    }

    #[test]
    fn test_parse_rejects_amount_below_smallest_unit() {
        assert_eq!(
            Money::parse("0.001"),
            Err(MoneyParseError::BelowSmallestUnit("0.001".into()))
        );
        assert!(Money::parse("0.004").is_err());
        assert_eq!(Money::parse("0.000").unwrap(), Money::zero());
        assert_eq!(
            MoneyParseError::BelowSmallestUnit("0.001".into()).to_string(),
            "Amount 0.001 is below the smallest amount (0.01)"
        );
        // Stored values that round away become zero and fail later validation
        assert_eq!(Money::from_f64(0.001), Some(Money::zero()));
    }

    #[test]
    fn test_parse_rejects_amount_above_max() {
        assert_eq!(Money::parse("1000000000000").unwrap(), MAX_AMOUNT);
        assert_eq!(
            Money::parse("1000000000000.01"),
            Err(MoneyParseError::TooLarge("1000000000000.01".into()))
        );
        assert!(matches!(
            Money::parse("92233720368547758"),
            Err(MoneyParseError::TooLarge(_))
        ));
        assert!(matches!(
            Money::parse("-92233720368547758"),
            Err(MoneyParseError::TooLarge(_))
        ));
    }

    #[test]
    fn test_from_f64_rejects_amount_above_max() {
        assert_eq!(Money::from_f64(1e12), Some(MAX_AMOUNT));
        assert!(Money::from_f64(9e16).is_none());
        assert!(Money::from_f64(-9e16).is_none());
        assert!(Money::from_f64(1e300).is_none());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(i64::MAX - 1);
        assert_eq!((big + Money::from_cents(10)).cents(), i64::MAX);
        assert_eq!((-big - Money::from_cents(10)).cents(), i64::MIN);

        let mut total = big;
        total += big;
        assert_eq!(total.cents(), i64::MAX);

        let sum: Money = [big, big, big].iter().sum();
        assert_eq!(sum.cents(), i64::MAX);
        assert_eq!(big.checked_add(big), None);
        assert_eq!(-Money::from_cents(i64::MIN), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Money::parse(""), Err(MoneyParseError::Empty));
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("10.-5").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);

        let amounts = [Money::from_cents(10), Money::from_cents(20), Money::from_cents(30)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 60);
    }

    #[test]
    fn test_serializes_as_currency_units() {
        assert_eq!(serde_json::to_string(&Money::from_cents(1050)).unwrap(), "10.5");
        assert_eq!(serde_json::to_string(&Money::from_cents(1000)).unwrap(), "10");

        let parsed: Money = serde_json::from_str("12.345").unwrap();
        assert_eq!(parsed.cents(), 1235);
        let parsed: Money = serde_json::from_str("7").unwrap();
        assert_eq!(parsed.cents(), 700);
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert!(Money::from_f64(f64::NAN).is_none());
        assert!(Money::from_f64(f64::INFINITY).is_none());
        assert_eq!(Money::from_f64(0.1 + 0.2).unwrap().cents(), 30);
    }
}
