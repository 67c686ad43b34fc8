//! Command handlers
//!
//! Each handler returns a serializable document; printing is left to the
//! binary so handlers stay testable.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use core_kernel::{ApplicationId, Currency, Money, QuoteId};
use domain_application::{ApplicationConfig, FormKind, MultiStepFormValidator};
use domain_loan::{parse_amount, AmortizationCalculator, FeeSchedule, LoanQuoteInput, PaymentCode};
use serde_json::Value;
use tracing::{debug, info};

use crate::cli::Command;
use crate::dto::{
    FeesResponse, FormResponse, PaymentCodeResponse, QuoteDisplay, QuoteResponse, StepResponse,
};
use crate::error::CliError;

/// Runs a command and returns its JSON output
pub fn execute(command: &Command, config: &ApplicationConfig) -> Result<Value, CliError> {
    let output = match command {
        Command::Quote {
            principal,
            rate,
            term,
            schedule,
        } => to_json(&quote(LoanQuoteInput::new(*principal, *rate, *term), *schedule)?)?,
        Command::Fees { amount } => to_json(&fees(amount)?)?,
        Command::Validate {
            form,
            step,
            all,
            values,
        } => {
            let values = read_values(values.as_deref())?;
            let kind = FormKind::from(*form);
            if *all {
                to_json(&validate_form(kind, &values, config)?)?
            } else {
                to_json(&validate_step(kind, step.unwrap_or(1), &values, config)?)?
            }
        }
        Command::PaymentCode { date } => {
            let code = match date {
                Some(date) => PaymentCode::generate(*date),
                None => PaymentCode::generate_today(),
            };
            info!(%code, "Issued payment code");
            to_json(&PaymentCodeResponse { code })?
        }
    };
    Ok(output)
}

/// Quotes a loan, optionally with its schedule
pub fn quote(input: LoanQuoteInput, with_schedule: bool) -> Result<QuoteResponse, CliError> {
    let (quote, rows) = if with_schedule {
        let schedule = AmortizationCalculator::schedule(&input)?;
        (schedule.quote, Some(schedule.rows))
    } else {
        (AmortizationCalculator::quote(&input)?, None)
    };
    let rounded = quote.to_money(Currency::USD)?;

    Ok(QuoteResponse {
        quote_id: QuoteId::new(),
        input,
        quote,
        display: QuoteDisplay {
            monthly_payment: rounded.monthly_payment.format_whole(),
            total_interest: rounded.total_interest.format_whole(),
            total_repayment: rounded.total_repayment.format_whole(),
        },
        rounded,
        schedule: rows,
    })
}

/// Fee quote for a typed amount such as `"$25,000"`
pub fn fees(raw_amount: &str) -> Result<FeesResponse, CliError> {
    let requested = Money::new(parse_amount(raw_amount), Currency::USD);
    let quote = FeeSchedule::default().quote(requested)?;
    debug!(raw_amount, total = %quote.total.amount(), "Computed processing fees");

    Ok(FeesResponse {
        requested: requested.format_grouped(),
        total_display: quote.total.format_grouped(),
        quote,
    })
}

/// Validates one step of a catalog form
pub fn validate_step(
    kind: FormKind,
    step: usize,
    values: &BTreeMap<String, String>,
    config: &ApplicationConfig,
) -> Result<StepResponse, CliError> {
    let validator = MultiStepFormValidator::new(kind.schema(config)?);
    let result = validator.validate_step(step, values);

    Ok(StepResponse {
        form: validator.schema().name().to_string(),
        version: validator.schema().version(),
        session_id: validator.session_id(),
        result,
    })
}

/// Validates every step of a catalog form
pub fn validate_form(
    kind: FormKind,
    values: &BTreeMap<String, String>,
    config: &ApplicationConfig,
) -> Result<FormResponse, CliError> {
    let validator = MultiStepFormValidator::new(kind.schema(config)?);
    let validation = validator.validate_all(values);
    let is_valid = validation.is_valid();
    let application_id = is_valid.then(ApplicationId::new);

    if let Some(id) = &application_id {
        info!(application_id = %id, form = kind.name(), "Form passed every step");
    }

    Ok(FormResponse {
        form: validator.schema().name().to_string(),
        version: validator.schema().version(),
        session_id: validator.session_id(),
        is_valid,
        application_id,
        validation,
    })
}

/// Reads field values from a file, or stdin when no path is given
pub fn read_values(path: Option<&Path>) -> Result<BTreeMap<String, String>, CliError> {
    let text = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    parse_values(&text)
}

/// Parses a JSON object of field values
///
/// Numbers and booleans are accepted and kept in their JSON spelling, so
/// `"terms": true` reads as `"true"`; `null` reads as an empty value.
pub fn parse_values(text: &str) -> Result<BTreeMap<String, String>, CliError> {
    let Value::Object(object) = serde_json::from_str::<Value>(text)? else {
        return Err(CliError::bad_argument("field values must be a JSON object"));
    };

    object
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => String::new(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(CliError::bad_argument(format!(
                        "field '{}' must be a string, number or boolean",
                        key
                    )))
                }
            };
            Ok((key, text))
        })
        .collect()
}

fn to_json<T: serde::Serialize>(document: &T) -> Result<Value, CliError> {
    Ok(serde_json::to_value(document)?)
}
