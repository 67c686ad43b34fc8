//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! QuickLoan test suite.
//!
//! # Modules
//!
//! - `fixtures`: Quote inputs and valid form values
//! - `assertions`: Assertion helpers for quotes, money and step results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
