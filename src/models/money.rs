//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides arithmetic, parsing from form text and the whole-unit
//! grouped display used on the balance cards.
//!
//! Arithmetic saturates at the bounds of `i64`, and parsed amounts are capped
//! at [`Money::MAX_AMOUNT`].

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Largest amount a form accepts: 10^13 currency units
    pub const MAX_AMOUNT: Money = Money(10_000_000_000_000 * 100);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use spending_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.cents(), 1050);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Whole units, rounded half away from zero
    pub const fn rounded_units(&self) -> i64 {
        if self.0 >= 0 {
            self.0.saturating_add(50) / 100
        } else {
            self.0.saturating_sub(50) / 100
        }
    }

    /// Amount in currency units as a float, for chart coordinates
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Subtract, stopping at zero
    pub fn saturating_sub_to_zero(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0).max(0))
    }

    /// Parse a non-negative money amount from form text
    ///
    /// Accepts "10", "10.5", "10.50" and thousands separators ("1,250.00").
    /// Negative amounts and amounts above [`Money::MAX_AMOUNT`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        if trimmed.starts_with('-') {
            return Err(MoneyParseError::Negative(trimmed.to_string()));
        }

        let s: String = trimmed.chars().filter(|c| *c != ',').collect();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let cents = if let Some((whole, frac)) = s.split_once('.') {
            if frac.contains('.') || !frac.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }

            let whole: i64 = if whole.is_empty() {
                0
            } else {
                whole.parse().map_err(|_| invalid())?
            };

            // Pad or truncate cents to 2 digits
            let cents: i64 = match frac.len() {
                0 => 0,
                1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                _ => frac[..2].parse().map_err(|_| invalid())?,
            };

            whole
                .checked_mul(100)
                .and_then(|c| c.checked_add(cents))
                .ok_or_else(invalid)?
        } else {
            s.parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(invalid)?
        };

        // "+5" parses as a positive i64; anything below zero here is malformed
        if cents < 0 {
            return Err(invalid());
        }
        if cents > Self::MAX_AMOUNT.0 {
            return Err(MoneyParseError::TooLarge(trimmed.to_string()));
        }

        Ok(Self(cents))
    }

    /// Format as whole units with grouped thousands and a currency suffix
    ///
    /// `Money::from_cents(1234567).format_grouped("KRW")` gives `"12,346 KRW"`.
    pub fn format_grouped(&self, suffix: &str) -> String {
        let units = self.rounded_units();
        let digits = units.unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        let sign = if units < 0 { "-" } else { "" };
        if suffix.is_empty() {
            format!("{}{}", sign, grouped)
        } else {
            format!("{}{} {}", sign, grouped, suffix)
        }
    }

    /// Text suitable for pre-filling a numeric input
    pub fn to_input_string(&self) -> String {
        if self.cents_part() == 0 {
            format!("{}", self.units())
        } else {
            format!("{}.{:02}", self.units(), self.cents_part())
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
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
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
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    Negative(String),
    InvalidFormat(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is required"),
            MoneyParseError::Negative(s) => write!(f, "Amount cannot be negative: {}", s),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
            MoneyParseError::TooLarge(s) => write!(
                f,
                "Amount is too large: {} (max {})",
                s,
                Money::MAX_AMOUNT.format_grouped("")
            ),
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
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("1,250.00").unwrap().cents(), 125_000);
        assert_eq!(Money::parse("0").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Money::parse("  "), Err(MoneyParseError::Empty));
        assert!(matches!(
            Money::parse("-10"),
            Err(MoneyParseError::Negative(_))
        ));
        assert!(matches!(
            Money::parse("ten"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Money::parse("1.2.3"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(Money::from_cents(1_234_567).format_grouped("KRW"), "12,346 KRW");
        assert_eq!(Money::from_units(0).format_grouped("KRW"), "0 KRW");
        assert_eq!(Money::from_units(999).format_grouped("KRW"), "999 KRW");
        assert_eq!(Money::from_units(1000).format_grouped("KRW"), "1,000 KRW");
        assert_eq!(
            Money::from_units(-1_234_567).format_grouped("KRW"),
            "-1,234,567 KRW"
        );
        assert_eq!(Money::from_units(50_000).format_grouped(""), "50,000");
    }

    #[test]
    fn test_rounded_units() {
        assert_eq!(Money::from_cents(149).rounded_units(), 1);
        assert_eq!(Money::from_cents(150).rounded_units(), 2);
        assert_eq!(Money::from_cents(-150).rounded_units(), -2);
    }

    #[test]
    fn test_saturating_sub_to_zero() {
        let m = Money::from_units(50);
        assert_eq!(m.saturating_sub_to_zero(Money::from_units(10)), Money::from_units(40));
        assert_eq!(m.saturating_sub_to_zero(Money::from_units(100)), Money::zero());
    }

    #[test]
    fn test_to_input_string() {
        assert_eq!(Money::from_units(250).to_input_string(), "250");
        assert_eq!(Money::from_cents(1005).to_input_string(), "10.05");
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_parse_upper_limit() {
        assert_eq!(Money::parse("10,000,000,000,000").unwrap(), Money::MAX_AMOUNT);
        assert!(matches!(
            Money::parse("10000000000000.01"),
            Err(MoneyParseError::TooLarge(_))
        ));
        assert!(matches!(
            Money::parse("92233720368547758.07"),
            Err(MoneyParseError::TooLarge(_))
        ));
        assert_eq!(
            Money::parse("99999999999999").unwrap_err().to_string(),
            "Amount is too large: 99999999999999 (max 10,000,000,000,000)"
        );
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(i64::MAX - 10);
        assert_eq!((big + big).cents(), i64::MAX);
        assert_eq!((-big - big).cents(), i64::MIN);
        assert_eq!((-(-big - big)).cents(), i64::MAX);
        assert_eq!(Money::from_cents(i64::MAX).rounded_units(), i64::MAX / 100);

        let mut total = big;
        total += big;
        assert_eq!(total.cents(), i64::MAX);

        let sum: Money = vec![big, big, big].into_iter().sum();
        assert_eq!(sum.cents(), i64::MAX);
    }
}
