//! Fixed-rate installment loan quotes
//!
//! Computes the level monthly payment of a standard annuity loan together
//! with total repayment and total interest, and expands a quote into a
//! month-by-month repayment schedule.
//!
//! All arithmetic is done in `f64`. Rounding to cents or whole units is a
//! presentation concern handled by [`LoanQuoteResult::to_money`]; rounded
//! values never feed back into a calculation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{Currency, Money};

use crate::error::LoanError;

/// Longest schedule that will be expanded row by row (100 years)
pub const MAX_SCHEDULE_MONTHS: u32 = 1200;

/// Parameters of a loan quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanQuoteInput {
    /// Amount borrowed
    pub principal: f64,
    /// Nominal annual interest rate in percent (4.99 for 4.99%)
    pub annual_rate_percent: f64,
    /// Number of monthly installments
    pub term_months: u32,
}

impl LoanQuoteInput {
    /// Creates a new quote input
    pub fn new(principal: f64, annual_rate_percent: f64, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_months,
        }
    }

    /// Checks that the input describes a computable loan
    ///
    /// # Errors
    ///
    /// Returns `LoanError::InvalidInput` when the principal is not a positive
    /// finite number, the rate is negative or not finite, or the term is zero.
    pub fn validate(&self) -> Result<(), LoanError> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(LoanError::invalid_input(format!(
                "principal must be positive, got {}",
                self.principal
            )));
        }
        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent < 0.0 {
            return Err(LoanError::invalid_input(format!(
                "annual rate must be zero or positive, got {}",
                self.annual_rate_percent
            )));
        }
        if self.term_months < 1 {
            return Err(LoanError::invalid_input("term must be at least 1 month"));
        }
        Ok(())
    }

    /// Returns the periodic (monthly) interest rate as a fraction
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }
}

/// Outcome of a loan quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanQuoteResult {
    /// Level monthly installment
    pub monthly_payment: f64,
    /// Total interest over the term
    pub total_interest: f64,
    /// Sum of all installments
    pub total_repayment: f64,
}

impl LoanQuoteResult {
    /// Converts the quote into money amounts rounded to the currency's minor unit
    ///
    /// # Errors
    ///
    /// Returns `LoanError::Money` if an amount cannot be represented as a decimal.
    pub fn to_money(&self, currency: Currency) -> Result<QuoteSummary, LoanError> {
        let convert = |value: f64| Money::from_f64(value, currency);

        Ok(QuoteSummary {
            monthly_payment: convert(self.monthly_payment)?,
            total_interest: convert(self.total_interest)?,
            total_repayment: convert(self.total_repayment)?,
        })
    }
}

/// A quote expressed in money, ready for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub monthly_payment: Money,
    pub total_interest: Money,
    pub total_repayment: Money,
}

/// One installment of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Installment number, starting at 1
    pub month: u32,
    /// Amount paid this month
    pub payment: f64,
    /// Portion of the payment that reduces the balance
    pub principal: f64,
    /// Portion of the payment that covers interest
    pub interest: f64,
    /// Outstanding balance after this payment
    pub balance: f64,
}

/// Month-by-month breakdown of a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub input: LoanQuoteInput,
    pub quote: LoanQuoteResult,
    pub rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    /// Sum of the interest portions of every row
    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|row| row.interest).sum()
    }

    /// Sum of the principal portions of every row
    pub fn total_principal(&self) -> f64 {
        self.rows.iter().map(|row| row.principal).sum()
    }

    /// Sum of every payment
    pub fn total_paid(&self) -> f64 {
        self.rows.iter().map(|row| row.payment).sum()
    }
}

/// Calculator for standard fixed-rate installment loans
///
/// Stateless; every method is a pure function of its arguments.
///
/// # Examples
///
/// ```rust
/// use domain_loan::AmortizationCalculator;
///
/// let quote = AmortizationCalculator::compute(12_000.0, 0.0, 12).unwrap();
/// assert_eq!(quote.monthly_payment, 1_000.0);
/// assert_eq!(quote.total_interest, 0.0);
/// ```
pub struct AmortizationCalculator;

impl AmortizationCalculator {
    /// Computes a quote from principal, annual rate in percent and term in months
    ///
    /// # Errors
    ///
    /// Returns `LoanError::InvalidInput` when `principal <= 0`,
    /// `annual_rate_percent < 0` or `term_months < 1`.
    pub fn compute(
        principal: f64,
        annual_rate_percent: f64,
        term_months: u32,
    ) -> Result<LoanQuoteResult, LoanError> {
        Self::quote(&LoanQuoteInput::new(principal, annual_rate_percent, term_months))
    }

    /// Computes a quote for the given input
    pub fn quote(input: &LoanQuoteInput) -> Result<LoanQuoteResult, LoanError> {
        input.validate()?;

        let monthly_payment =
            level_payment(input.principal, input.monthly_rate(), input.term_months);
        let total_repayment = monthly_payment * f64::from(input.term_months);
        let total_interest = total_repayment - input.principal;

        debug!(
            principal = input.principal,
            annual_rate_percent = input.annual_rate_percent,
            term_months = input.term_months,
            monthly_payment,
            "Computed loan quote"
        );

        Ok(LoanQuoteResult {
            monthly_payment,
            total_interest,
            total_repayment,
        })
    }

    /// Expands a quote into its repayment schedule
    ///
    /// The last row pays off whatever balance is left so the schedule always
    /// closes at exactly zero.
    ///
    /// # Errors
    ///
    /// Returns `LoanError::InvalidInput` for invalid input or a term longer
    /// than [`MAX_SCHEDULE_MONTHS`].
    pub fn schedule(input: &LoanQuoteInput) -> Result<AmortizationSchedule, LoanError> {
        let quote = Self::quote(input)?;
        if input.term_months > MAX_SCHEDULE_MONTHS {
            return Err(LoanError::invalid_input(format!(
                "schedule limited to {} months, got {}",
                MAX_SCHEDULE_MONTHS, input.term_months
            )));
        }

        let rate = input.monthly_rate();
        let mut balance = input.principal;
        let mut rows = Vec::with_capacity(input.term_months as usize);

        for month in 1..=input.term_months {
            let interest = balance * rate;
            let (payment, principal) = if month == input.term_months {
                (balance + interest, balance)
            } else {
                (quote.monthly_payment, quote.monthly_payment - interest)
            };
            balance = if month == input.term_months {
                0.0
            } else {
                balance - principal
            };

            rows.push(AmortizationRow {
                month,
                payment,
                principal,
                interest,
                balance,
            });
        }

        debug!(rows = rows.len(), "Built amortization schedule");

        Ok(AmortizationSchedule {
            input: *input,
            quote,
            rows,
        })
    }
}

/// Level payment of an annuity: `P·r·(1+r)^n / ((1+r)^n − 1)`
///
/// Evaluated as `P·r / (1 − (1+r)^−n)`, which stays finite when `(1+r)^n`
/// overflows and tends to the interest-only payment `P·r`.
fn level_payment(principal: f64, rate: f64, term_months: u32) -> f64 {
    let periods = f64::from(term_months);
    if rate == 0.0 {
        return principal / periods;
    }

    let growth = (1.0 + rate).powf(periods);
    let denominator = 1.0 - growth.recip();
    if denominator == 0.0 {
        return principal / periods;
    }
    principal * rate / denominator
}
