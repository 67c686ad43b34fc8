//! CLI error handling

use domain_application::SchemaError;
use domain_loan::LoanError;
use thiserror::Error;

/// Errors that end a command with a non-zero exit code
///
/// Invalid form values are not errors; they are printed as a step result.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    Loan(#[from] LoanError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bad argument: {0}")]
    BadArgument(String),
}

impl CliError {
    pub fn bad_argument(message: impl Into<String>) -> Self {
        CliError::BadArgument(message.into())
    }
}
