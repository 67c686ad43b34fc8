//! Command-line arguments

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use domain_application::FormKind;

#[derive(Parser, Debug)]
#[command(name = "quickloan", version, about = "QuickLoan quotes, fees and form checks")]
pub struct Cli {
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text, help = "Log output format (logs go to stderr)")]
    pub log_format: LogFormat,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Monthly payment, total interest and total repayment of a fixed-rate loan
    Quote {
        #[arg(long, allow_negative_numbers = true, help = "Amount borrowed")]
        principal: f64,
        #[arg(long, allow_negative_numbers = true, help = "Annual interest rate in percent, e.g. 4.99")]
        rate: f64,
        #[arg(long, help = "Term in months")]
        term: u32,
        #[arg(long, default_value_t = false, help = "Include the month-by-month schedule")]
        schedule: bool,
    },
    /// Processing and insurance fees owed on a loan amount
    Fees {
        #[arg(long, help = "Loan amount; separators and currency symbols are ignored")]
        amount: String,
    },
    /// Validate field values against one of the built-in forms
    Validate {
        #[arg(long, value_enum)]
        form: FormArg,
        #[arg(long, conflicts_with = "all", help = "1-based step to validate")]
        step: Option<usize>,
        #[arg(long, default_value_t = false, help = "Validate every step")]
        all: bool,
        #[arg(long, help = "JSON object of field values; read from stdin when omitted")]
        values: Option<PathBuf>,
    },
    /// Issue a processing fee payment reference
    PaymentCode {
        #[arg(long, help = "Date to embed (YYYY-MM-DD); defaults to today")]
        date: Option<NaiveDate>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormArg {
    LoanApplication,
    Signup,
    Login,
    PaymentAccount,
}

impl From<FormArg> for FormKind {
    fn from(arg: FormArg) -> Self {
        match arg {
            FormArg::LoanApplication => FormKind::LoanApplication,
            FormArg::Signup => FormKind::Signup,
            FormArg::Login => FormKind::Login,
            FormArg::PaymentAccount => FormKind::PaymentAccount,
        }
    }
}
