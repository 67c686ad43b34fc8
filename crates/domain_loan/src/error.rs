//! Lending domain errors

use core_kernel::MoneyError;
use thiserror::Error;

/// Errors that can occur in the lending domain
#[derive(Debug, Error, PartialEq)]
pub enum LoanError {
    /// Quote parameters outside the accepted domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Money conversion or arithmetic failure
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Payment code that does not follow `QL-YYYYMMDD-NNNN`
    #[error("Invalid payment code: {0}")]
    InvalidPaymentCode(String),
}

impl LoanError {
    /// Creates an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        LoanError::InvalidInput(message.into())
    }
}
