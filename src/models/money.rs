//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Arithmetic saturates at the i64 bounds instead of overflowing.
//! Provides locale-style formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use finplan_cli::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.cents(), 1050);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// Saturates outside roughly ±92 quadrillion units.
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Create a Money amount from a fractional number of currency units,
    /// rounding to the nearest cent (half away from zero)
    ///
    /// Non-finite values become zero.
    pub fn from_f64(units: f64) -> Self {
        if !units.is_finite() {
            return Self::zero();
        }
        Self((units * 100.0).round() as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a fractional number of currency units
    pub fn as_f64(&self) -> f64 {
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

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Clamp negative amounts to zero
    pub fn non_negative(&self) -> Self {
        Self(self.0.max(0))
    }

    /// Divide by a scalar, rounding to the nearest cent
    ///
    /// Division by zero (or a non-finite divisor) yields zero.
    pub fn div_f64(&self, divisor: f64) -> Self {
        if divisor == 0.0 || !divisor.is_finite() {
            return Self::zero();
        }
        Self((self.0 as f64 / divisor).round() as i64)
    }

    /// This amount as a percentage of `whole`
    ///
    /// Returns 0 when `whole` is not positive.
    pub fn percent_of(&self, whole: Money) -> f64 {
        if whole.is_positive() {
            self.0 as f64 * 100.0 / whole.0 as f64
        } else {
            0.0
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
            write!(f, "-${}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.units(), self.cents_part())
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

impl Mul<i64> for Money {
    type Output = Self;

    fn mul(self, factor: i64) -> Self {
        Self(self.0.saturating_mul(factor))
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

/// Currency presentation: symbol, digit grouping and decimal separator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Symbol placed before the amount
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Separator inserted every three integer digits
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,

    /// Separator between whole units and the fraction
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
}

fn default_symbol() -> String {
    "$".to_string()
}

fn default_thousands_separator() -> String {
    ",".to_string()
}

fn default_decimal_separator() -> String {
    ".".to_string()
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
        }
    }
}

impl CurrencyFormat {
    /// Format with no fractional digits, e.g. `$12,500`
    pub fn whole(&self, amount: Money) -> String {
        self.format(amount, 0)
    }

    /// Format with two fractional digits, e.g. `$12,500.00`
    pub fn exact(&self, amount: Money) -> String {
        self.format(amount, 2)
    }

    /// Format `amount` with `decimals` fractional digits (0, 1 or 2)
    ///
    /// Rounding is half away from zero.
    pub fn format(&self, amount: Money, decimals: u8) -> String {
        let decimals = decimals.min(2);
        let divisor = 10_i64.pow(2 - decimals as u32);
        let cents = amount.cents().abs();
        let scaled = (cents + divisor / 2) / divisor;

        let scale = 10_i64.pow(decimals as u32);
        let whole = scaled / scale;
        let fraction = scaled % scale;

        // "-0" is never shown
        let sign = if amount.is_negative() && scaled != 0 { "-" } else { "" };

        let mut out = format!("{}{}{}", sign, self.symbol, self.group(whole));
        if decimals > 0 {
            out.push_str(&self.decimal_separator);
            out.push_str(&format!("{:0width$}", fraction, width = decimals as usize));
        }
        out
    }

    fn group(&self, value: i64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push_str(&self.thousands_separator);
            }
            out.push(c);
        }
        out
    }
}
