//! Pre-built Test Fixtures
//!
//! Provides ready-to-use quote inputs and form values. Form values are
//! valid for the built-in catalog schemas with the default configuration.

use std::collections::HashMap;

use core_kernel::{Currency, Money};
use domain_loan::LoanQuoteInput;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The calculator widget's default loan amount
    pub fn usd_10000() -> Money {
        Money::new(dec!(10000.00), Currency::USD)
    }

    /// Below the fee schedule's floor
    pub fn usd_50() -> Money {
        Money::new(dec!(50.00), Currency::USD)
    }

    /// Creates a EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }
}

/// Fixture for loan quote inputs
pub struct QuoteFixtures;

impl QuoteFixtures {
    /// Calculator widget defaults: $10,000 at 4.99% over 12 months
    pub fn widget_defaults() -> LoanQuoteInput {
        LoanQuoteInput::new(10_000.0, 4.99, 12)
    }

    /// 30 year mortgage: $200,000 at 6%
    pub fn mortgage() -> LoanQuoteInput {
        LoanQuoteInput::new(200_000.0, 6.0, 360)
    }

    /// Interest-free loan
    pub fn zero_rate() -> LoanQuoteInput {
        LoanQuoteInput::new(12_000.0, 0.0, 24)
    }
}

/// Field values keyed by field id
pub type Values = HashMap<String, String>;

fn values(pairs: &[(&str, &str)]) -> Values {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Fixture for form values
pub struct ApplicationFixtures;

impl ApplicationFixtures {
    /// Step 1 of the loan application
    pub fn personal_step() -> Values {
        values(&[
            ("fullname", "Jane Doe"),
            ("email", "jane@example.com"),
            ("phone", "(555) 123-4567"),
        ])
    }

    /// Step 2 of the loan application
    pub fn loan_step() -> Values {
        values(&[
            ("loanType", "personal"),
            ("loanAmount", "25000"),
            ("income", "72000"),
        ])
    }

    /// Step 3 of the loan application
    pub fn card_step() -> Values {
        values(&[
            ("cardName", "JANE DOE"),
            ("cardNumber", "4111 1111 1111 1111"),
            ("expiryDate", "09/28"),
            ("cvcField", "123"),
        ])
    }

    /// Step 4 of the loan application
    pub fn verification_step() -> Values {
        values(&[
            ("address", "12 Main Street, Springfield"),
            ("zipCode", "62701"),
            ("ssn", "123-45-6789"),
            ("terms", "on"),
        ])
    }

    /// Every step of the loan application
    pub fn loan_application() -> Values {
        let mut all = Self::personal_step();
        all.extend(Self::loan_step());
        all.extend(Self::card_step());
        all.extend(Self::verification_step());
        all
    }

    pub fn signup() -> Values {
        values(&[
            ("fullName", "Jane O'Neil-Doe"),
            ("signupEmail", "jane@example.com"),
            ("phoneNumber", "+1 555 123 4567"),
            ("signupPassword", "Secret123"),
            ("confirmPassword", "Secret123"),
            ("agreeTerms", "on"),
        ])
    }

    pub fn login() -> Values {
        values(&[("loginEmail", "jane@example.com"), ("loginPassword", "secret")])
    }

    pub fn payment_account() -> Values {
        values(&[
            ("accountName", "Main Operating"),
            ("accountType", "checking"),
            ("accountNumber", "000123456789"),
            ("routingNumber", "021000021"),
            ("accountHolder", "QuickLoan LLC"),
        ])
    }

    /// Returns `base` with one field replaced
    pub fn with(mut base: Values, field: &str, value: &str) -> Values {
        base.insert(field.to_string(), value.to_string());
        base
    }

    /// Returns `base` with one field removed
    pub fn without(mut base: Values, field: &str) -> Values {
        base.remove(field);
        base
    }
}
