//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. The relational store keeps amounts as REAL, so conversion from
//! `f64` rounds to the nearest cent. Stored amounts are bounded by
//! [`Money::MAX_CENTS`]; arithmetic saturates instead of wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest magnitude accepted from storage (ten trillion units)
    pub const MAX_CENTS: i64 = 1_000_000_000_000_000;

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use finboard::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Convert a stored REAL amount, rounding half away from zero
    ///
    /// Returns `None` for NaN, infinities and amounts beyond [`Money::MAX_CENTS`].
    pub fn from_f64(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let cents = (amount * 100.0).round();
        if cents.abs() > Self::MAX_CENTS as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Add, returning `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a floating-point number of units (for export only)
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
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

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{} {}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{} {}.{:02}", symbol, self.units(), self.cents_part())
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
        self.0 = self.0.saturating_add(other.0);
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
        self.0 = self.0.saturating_sub(other.0);
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
    fn test_from_f64_rounds_to_cents() {
        assert_eq!(Money::from_f64(10.5).unwrap().cents(), 1050);
        assert_eq!(Money::from_f64(0.125).unwrap().cents(), 13);
        assert_eq!(Money::from_f64(14999.99).unwrap().cents(), 1499999);
        assert_eq!(Money::from_f64(-3.0).unwrap().cents(), -300);
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert!(Money::from_f64(f64::NAN).is_none());
        assert!(Money::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn test_from_f64_rejects_amounts_past_the_bound() {
        assert_eq!(Money::from_f64(1.0e13).unwrap().cents(), Money::MAX_CENTS);
        assert!(Money::from_f64(5.0e16).is_none());
        assert!(Money::from_f64(-5.0e16).is_none());
    }

    #[test]
    fn test_checked_add_and_saturation() {
        let big = Money::from_cents(i64::MAX - 10);
        assert_eq!(big.checked_add(Money::from_cents(10)), Some(Money::from_cents(i64::MAX)));
        assert!(big.checked_add(Money::from_cents(11)).is_none());
        assert_eq!(big + big, Money::from_cents(i64::MAX));
        assert_eq!(Money::from_cents(i64::MIN) - Money::from_cents(1), Money::from_cents(i64::MIN));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_units(160).format_with_symbol("R$"), "R$ 160.00");
        assert_eq!(Money::from_cents(-5).format_with_symbol("$"), "-$ 0.05");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_units(10);
        let b = Money::from_units(4);
        assert_eq!((a - b).cents(), 600);
        let total: Money = [a, b].iter().sum();
        assert_eq!(total, Money::from_units(14));
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
    }
}
