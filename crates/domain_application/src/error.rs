//! Application domain errors
//!
//! Invalid user input is never an error here: it is reported as data in a
//! `StepResult`. Only a malformed schema or configuration fails.

use thiserror::Error;

/// Errors raised while building a form schema
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SchemaError {
    /// The schema declares no steps
    #[error("Form '{0}' has no steps")]
    NoSteps(String),

    /// A step declares no fields
    #[error("Step {step} declares no fields")]
    EmptyStep { step: usize },

    /// A field has an empty identifier
    #[error("Step {step} has a field with an empty id")]
    EmptyFieldId { step: usize },

    /// Two fields share the same identifier
    #[error("Field '{0}' is declared more than once")]
    DuplicateField(String),

    /// A cross-field rule points at a field that is not in the same step
    #[error("Field '{field}' references unknown field '{referenced}'")]
    UnknownReference { field: String, referenced: String },

    /// A range rule with NaN or inverted bounds
    #[error("Field '{field}' has an invalid range: {reason}")]
    InvalidRange { field: String, reason: String },

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SchemaError {
    /// Creates an invalid range error
    pub fn invalid_range(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::InvalidRange {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        SchemaError::Configuration(message.into())
    }
}
