//! Payment reference codes for processing fee payments

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::LoanError;

const PREFIX: &str = "QL";
const SUFFIX_MIN: u16 = 1000;
const SUFFIX_MAX: u16 = 9999;

/// Reference quoted by the applicant when paying the processing fee
///
/// Rendered as `QL-YYYYMMDD-NNNN` where the date is the issue date and
/// `NNNN` is a four digit number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PaymentCode {
    date: NaiveDate,
    suffix: u16,
}

impl PaymentCode {
    /// Creates a code for a given date and suffix
    ///
    /// # Errors
    ///
    /// Returns `LoanError::InvalidPaymentCode` if the suffix is not four digits.
    pub fn new(date: NaiveDate, suffix: u16) -> Result<Self, LoanError> {
        if !(SUFFIX_MIN..=SUFFIX_MAX).contains(&suffix) {
            return Err(LoanError::InvalidPaymentCode(format!(
                "suffix must be between {} and {}, got {}",
                SUFFIX_MIN, SUFFIX_MAX, suffix
            )));
        }
        Ok(Self { date, suffix })
    }

    /// Issues a code for `date` with a random suffix
    pub fn generate(date: NaiveDate) -> Self {
        let span = u128::from(SUFFIX_MAX - SUFFIX_MIN + 1);
        let offset = (Uuid::new_v4().as_u128() % span) as u16;
        Self {
            date,
            suffix: SUFFIX_MIN + offset,
        }
    }

    /// Issues a code dated today (UTC)
    pub fn generate_today() -> Self {
        Self::generate(Utc::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn suffix(&self) -> u16 {
        self.suffix
    }
}

impl fmt::Display for PaymentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:04}{:02}{:02}-{}",
            PREFIX,
            self.date.year(),
            self.date.month(),
            self.date.day(),
            self.suffix
        )
    }
}

impl FromStr for PaymentCode {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LoanError::InvalidPaymentCode(s.to_string());

        let mut parts = s.trim().split('-');
        let (Some(prefix), Some(date), Some(suffix), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        if prefix != PREFIX || date.len() != 8 || suffix.len() != 4 {
            return Err(invalid());
        }
        if !suffix.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(date, "%Y%m%d").map_err(|_| invalid())?;
        let suffix = suffix.parse::<u16>().map_err(|_| invalid())?;
        Self::new(date, suffix)
    }
}

impl TryFrom<String> for PaymentCode {
    type Error = LoanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PaymentCode> for String {
    fn from(code: PaymentCode) -> Self {
        code.to_string()
    }
}
