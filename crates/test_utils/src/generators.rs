//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Currency, Money};
use proptest::prelude::*;

/// Strategy for loan principals, from $1 to $10M
pub fn principal_strategy() -> impl Strategy<Value = f64> {
    1.0f64..10_000_000.0
}

/// Strategy for annual rates in percent, 0% up to 100%
pub fn rate_percent_strategy() -> impl Strategy<Value = f64> {
    0.0f64..100.0
}

/// Strategy for loan terms, one month to fifty years
pub fn term_strategy() -> impl Strategy<Value = u32> {
    1u32..=600
}

/// Strategy for USD amounts in cents
pub fn usd_money_strategy() -> impl Strategy<Value = Money> {
    (1i64..100_000_000i64).prop_map(|cents| Money::from_minor(cents, Currency::USD))
}

/// Strategy for card numbers of 13 to 19 digits with a valid Luhn check digit
pub fn luhn_card_strategy() -> impl Strategy<Value = String> {
    (12usize..=18)
        .prop_flat_map(|len| proptest::collection::vec(0u32..10, len))
        .prop_map(|body| {
            let mut digits: String = body.iter().map(|&d| char::from(b'0' + d as u8)).collect();
            digits.push(luhn_check_digit(&body));
            digits
        })
}

/// Check digit that makes `body` followed by it pass the Luhn checksum
pub fn luhn_check_digit(body: &[u32]) -> char {
    // The check digit sits at position 0 from the right, so the body's
    // rightmost digit is doubled.
    let sum: u32 = body
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    char::from(b'0' + ((10 - sum % 10) % 10) as u8)
}

/// Strategy for addresses of the `local@domain.tld` shape
pub fn email_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9._%+-]{1,16}@[a-z0-9-]{1,12}\\.[a-z]{2,6}"
}

/// Strategy for US phone numbers in common notations
pub fn phone_strategy() -> impl Strategy<Value = String> {
    (100u32..1000, 100u32..1000, 1000u32..10000, 0usize..3).prop_map(|(area, exchange, line, style)| {
        match style {
            0 => format!("({}) {}-{}", area, exchange, line),
            1 => format!("+1 {} {} {}", area, exchange, line),
            _ => format!("{}{}{}", area, exchange, line),
        }
    })
}
