//! Money types with precise decimal arithmetic
//!
//! Loan quotes are computed in floating point and converted into `Money`
//! only for presentation. Fees and clamped loan amounts are computed
//! directly in `Money` so that cents never drift.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Scale kept on every stored amount
const STORED_SCALE: u32 = 4;

/// Currencies the site can quote in (ISO 4217 codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Digits after the decimal point in the minor unit
    pub fn decimal_places(&self) -> u32 {
        if *self == Currency::JPY {
            0
        } else {
            2
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: Currency, found: Currency },

    #[error("Amount {0} cannot be represented as money")]
    InvalidAmount(String),
}

/// A monetary amount with associated currency
///
/// Amounts are stored at four decimal places; rounding to the currency's
/// minor unit happens only through `round_to_currency` and the display
/// helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(STORED_SCALE),
            currency,
        }
    }

    /// Creates Money from an integer count of minor units (cents for USD)
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        Self::new(Decimal::new(minor_units, currency.decimal_places()), currency)
    }

    /// Converts a floating point amount, rounded half away from zero to the
    /// currency's minor unit in a single step
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` for NaN, infinities and values
    /// outside the range `Decimal` can represent.
    pub fn from_f64(amount: f64, currency: Currency) -> Result<Self, MoneyError> {
        let value = Decimal::from_f64(amount)
            .ok_or_else(|| MoneyError::InvalidAmount(amount.to_string()))?;
        let rounded = value
            .round_dp_with_strategy(currency.decimal_places(), RoundingStrategy::MidpointAwayFromZero);
        Ok(Self::new(rounded, currency))
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Strictly less than zero
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Rounds half away from zero to the currency's minor unit
    pub fn round_to_currency(&self) -> Self {
        Self::new(self.rounded(self.currency.decimal_places()), self.currency)
    }

    /// Restricts the amount to the inclusive range `[min, max]`
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` when a bound is in a different
    /// currency.
    pub fn clamp(&self, min: &Money, max: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(min)?;
        self.ensure_same_currency(max)?;
        Ok(Self::new(self.amount.clamp(min.amount, max.amount), self.currency))
    }

    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(Self::new(self.amount - other.amount, self.currency))
    }

    /// Formats with thousands separators at the currency's minor unit,
    /// e.g. `$1,234.56`
    pub fn format_grouped(&self) -> String {
        self.format_at(self.currency.decimal_places())
    }

    /// Formats rounded to whole currency units, e.g. `$856`
    pub fn format_whole(&self) -> String {
        self.format_at(0)
    }

    fn rounded(&self, dp: u32) -> Decimal {
        self.amount
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
    }

    fn format_at(&self, dp: u32) -> String {
        let rounded = self.rounded(dp);
        let digits = format!("{:.*}", dp as usize, rounded.abs());
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        let sign = if rounded < Decimal::ZERO { "-" } else { "" };
        let mut out = format!("{}{}{}", sign, self.currency.symbol(), group_thousands(whole));
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency,
                found: other.currency,
            })
        }
    }
}

/// Inserts a comma between every group of three digits, counting from the right
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places() as usize;
        write!(f, "{} {:.*}", self.currency.symbol(), dp, self.amount)
    }
}

/// A fee or interest rate held as a fraction (`0.04` is 4%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate(Decimal);

impl Rate {
    pub fn new(fraction: Decimal) -> Self {
        Self(fraction)
    }

    /// `Rate::from_percentage(dec!(6.5))` is 6.5%
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self(percentage / dec!(100))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn as_percentage(&self) -> Decimal {
        self.0 * dec!(100)
    }

    /// The share of `money` this rate represents, unrounded
    pub fn apply(&self, money: &Money) -> Money {
        Money::new(money.amount * self.0, money.currency)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(STORED_SCALE).normalize())
    }
}
