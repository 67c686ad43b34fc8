//! Lending Domain
//!
//! Pure calculations behind the loan calculator widget and the processing
//! fee page:
//! - **Amortization**: fixed-rate installment quotes and month-by-month schedules
//! - **Fees**: processing and insurance fees charged on the requested amount
//! - **Payment codes**: `QL-YYYYMMDD-NNNN` references for fee payments
//!
//! # Example
//!
//! ```rust
//! use domain_loan::AmortizationCalculator;
//!
//! let quote = AmortizationCalculator::compute(10_000.0, 4.99, 12).unwrap();
//! assert_eq!(quote.monthly_payment.round(), 856.0);
//! ```

pub mod amortization;
pub mod fees;
pub mod payment_code;
pub mod error;

pub use amortization::{
    AmortizationCalculator, AmortizationRow, AmortizationSchedule, LoanQuoteInput,
    LoanQuoteResult, QuoteSummary,
};
pub use fees::{FeeQuote, FeeSchedule, parse_amount};
pub use payment_code::PaymentCode;
pub use error::LoanError;
