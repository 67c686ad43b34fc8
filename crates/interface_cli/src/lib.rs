//! Command-line interface
//!
//! The `quickloan` binary wraps the lending and application domains:
//! - **quote**: loan calculator figures, optionally with the full schedule
//! - **fees**: processing fee page totals
//! - **validate**: built-in forms checked step by step or all at once
//! - **payment-code**: `QL-YYYYMMDD-NNNN` references
//!
//! Every command prints one pretty JSON document on stdout.

pub mod cli;
pub mod commands;
pub mod dto;
pub mod error;

pub use cli::{Cli, Command, FormArg, LogFormat};
pub use commands::execute;
pub use error::CliError;
