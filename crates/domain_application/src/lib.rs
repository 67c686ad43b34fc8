//! Loan Application Domain
//!
//! Multi-step form validation for the loan application and the account
//! forms around it:
//! - **Schemas**: versioned forms made of steps, fields and declarative rules
//! - **Validator**: one step-tracking state machine per form session
//! - **Catalog**: the site's forms as ready-made schemas
//! - **Masking**: shaping raw keystrokes into the accepted formats
//!
//! # Step lifecycle
//!
//! ```text
//! Step 1 -> Step 2 -> ... -> Step N
//!        <-        <-     <-
//! ```
//!
//! Forward moves require the current step to validate; backward moves never do.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use domain_application::{FormField, FormSchema, MultiStepFormValidator, Pattern, StepSchema};
//!
//! let schema = FormSchema::builder("contact", 1)
//!     .step(StepSchema::new("Contact").field(
//!         FormField::text("email")
//!             .required("Email is required")
//!             .pattern(Pattern::Email, "Please enter a valid email address"),
//!     ))
//!     .step(StepSchema::new("Consent").field(
//!         FormField::checkbox("terms").required("You must agree to the terms"),
//!     ))
//!     .build()
//!     .unwrap();
//!
//! let mut validator = MultiStepFormValidator::new(schema);
//! let values = HashMap::from([("email", "jane@example.com")]);
//! assert!(validator.advance(&values).accepted);
//! assert_eq!(validator.current_step(), 2);
//! ```

pub mod catalog;
pub mod checks;
pub mod config;
pub mod error;
pub mod masking;
pub mod result;
pub mod rules;
pub mod schema;
pub mod validator;

pub use catalog::{
    loan_application_schema, login_schema, payment_account_schema, signup_schema, FormKind,
};
pub use config::ApplicationConfig;
pub use error::SchemaError;
pub use masking::CardBrand;
pub use result::{AdvanceOutcome, FormValidation, StepResult, STEP_ERROR_KEY};
pub use rules::{CrossFieldPredicate, CustomPredicate, Pattern, RuleKind, ValidationRule};
pub use schema::{FieldKind, FieldValues, FormField, FormSchema, FormSchemaBuilder, StepSchema};
pub use validator::MultiStepFormValidator;
