//! Processing fee quotes
//!
//! Before an application is released the applicant pays a processing fee
//! and a loan insurance fee, both charged as a percentage of the requested
//! amount. The requested amount is clamped into the schedule's bounds first.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{Currency, Money, Rate};

use crate::error::LoanError;

/// Fee rates and the loan amount bounds they apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    processing_rate: Rate,
    insurance_rate: Rate,
    min_amount: Money,
    max_amount: Money,
}

impl Default for FeeSchedule {
    /// 4% processing, 6.5% insurance, loan amounts between $100 and $500,000
    fn default() -> Self {
        Self {
            processing_rate: Rate::from_percentage(dec!(4)),
            insurance_rate: Rate::from_percentage(dec!(6.5)),
            min_amount: Money::new(dec!(100), Currency::USD),
            max_amount: Money::new(dec!(500000), Currency::USD),
        }
    }
}

impl FeeSchedule {
    /// Creates a fee schedule
    ///
    /// # Errors
    ///
    /// Returns `LoanError::InvalidInput` if a rate is negative, the bounds
    /// are inverted or not positive, and `LoanError::Money` if the bounds
    /// use different currencies.
    pub fn new(
        processing_rate: Rate,
        insurance_rate: Rate,
        min_amount: Money,
        max_amount: Money,
    ) -> Result<Self, LoanError> {
        if processing_rate.as_decimal().is_sign_negative()
            || insurance_rate.as_decimal().is_sign_negative()
        {
            return Err(LoanError::invalid_input("fee rates cannot be negative"));
        }
        if !min_amount.is_positive() {
            return Err(LoanError::invalid_input("minimum loan amount must be positive"));
        }
        if max_amount.checked_sub(&min_amount)?.is_negative() {
            return Err(LoanError::invalid_input(format!(
                "minimum loan amount {} exceeds maximum {}",
                min_amount, max_amount
            )));
        }

        Ok(Self {
            processing_rate,
            insurance_rate,
            min_amount,
            max_amount,
        })
    }

    pub fn processing_rate(&self) -> Rate {
        self.processing_rate
    }

    pub fn insurance_rate(&self) -> Rate {
        self.insurance_rate
    }

    pub fn min_amount(&self) -> Money {
        self.min_amount
    }

    pub fn max_amount(&self) -> Money {
        self.max_amount
    }

    /// Both fee rates added together
    pub fn combined_rate(&self) -> Rate {
        Rate::new(self.processing_rate.as_decimal() + self.insurance_rate.as_decimal())
    }

    /// Quotes the fees due on a requested loan amount
    ///
    /// # Errors
    ///
    /// Returns `LoanError::Money` if the amount is not in the schedule's currency.
    pub fn quote(&self, requested: Money) -> Result<FeeQuote, LoanError> {
        let loan_amount = requested.clamp(&self.min_amount, &self.max_amount)?;
        let processing_fee = self.processing_rate.apply(&loan_amount).round_to_currency();
        let insurance_fee = self.insurance_rate.apply(&loan_amount).round_to_currency();
        let total = processing_fee.checked_add(&insurance_fee)?;

        if loan_amount != requested {
            debug!(
                requested = %requested.amount(),
                clamped = %loan_amount.amount(),
                "Requested loan amount clamped into fee schedule bounds"
            );
        }

        Ok(FeeQuote {
            loan_amount,
            processing_fee,
            insurance_fee,
            total,
        })
    }
}

/// Fees due for one application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    /// Loan amount the fees were computed on, after clamping
    pub loan_amount: Money,
    pub processing_fee: Money,
    pub insurance_fee: Money,
    pub total: Money,
}

/// Reads a loosely formatted amount such as `"$10,000.50"`
///
/// Every character other than digits, `.` and `-` is discarded, then the
/// longest leading number is taken. Anything unreadable is zero.
pub fn parse_amount(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let (negative, rest) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    let whole: String = rest.chars().take_while(char::is_ascii_digit).collect();
    let fraction: String = rest[whole.len()..]
        .strip_prefix('.')
        .map(|after| after.chars().take_while(char::is_ascii_digit).collect())
        .unwrap_or_default();

    if whole.is_empty() && fraction.is_empty() {
        return Decimal::ZERO;
    }

    let text = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if whole.is_empty() { "0" } else { &whole },
        if fraction.is_empty() { "0" } else { &fraction },
    );
    text.parse::<Decimal>().unwrap_or(Decimal::ZERO)
}
