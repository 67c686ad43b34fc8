//! Built-in form schemas
//!
//! Each form the site collects is described by one versioned schema. The
//! field ids and messages are the ones the pages show.

use std::fmt;
use std::str::FromStr;

use core_kernel::{Currency, Money};

use crate::config::ApplicationConfig;
use crate::error::SchemaError;
use crate::rules::Pattern;
use crate::schema::{FormField, FormSchema, StepSchema};

/// Forms known to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    LoanApplication,
    Signup,
    Login,
    PaymentAccount,
}

impl FormKind {
    pub const ALL: [FormKind; 4] = [
        FormKind::LoanApplication,
        FormKind::Signup,
        FormKind::Login,
        FormKind::PaymentAccount,
    ];

    /// Schema name of the form
    pub fn name(&self) -> &'static str {
        match self {
            FormKind::LoanApplication => "loan-application",
            FormKind::Signup => "signup",
            FormKind::Login => "login",
            FormKind::PaymentAccount => "payment-account",
        }
    }

    /// Builds the form's schema
    pub fn schema(&self, config: &ApplicationConfig) -> Result<FormSchema, SchemaError> {
        match self {
            FormKind::LoanApplication => loan_application_schema(config),
            FormKind::Signup => signup_schema(),
            FormKind::Login => login_schema(),
            FormKind::PaymentAccount => payment_account_schema(),
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| SchemaError::configuration(format!("unknown form '{}'", s)))
    }
}

/// The four-step loan application
///
/// 1. personal details, 2. loan details, 3. card, 4. verification
pub fn loan_application_schema(config: &ApplicationConfig) -> Result<FormSchema, SchemaError> {
    config.validate()?;

    let amount_message = format!(
        "Loan amount must be between {} and {}",
        whole_dollars(config.loan_amount_min)?,
        whole_dollars(config.loan_amount_max)?
    );

    FormSchema::builder(FormKind::LoanApplication.name(), 1)
        .step(
            StepSchema::new("Personal Information")
                .field(
                    FormField::text("fullname")
                        .required("Please enter your full name")
                        .pattern(Pattern::FullName, "Please enter your full name"),
                )
                .field(
                    FormField::text("email")
                        .required("Please enter a valid email address")
                        .pattern(Pattern::Email, "Please enter a valid email address"),
                )
                .field(
                    FormField::text("phone")
                        .required("Please enter a valid phone number")
                        .pattern(Pattern::Phone, "Please enter a valid phone number"),
                ),
        )
        .step(
            StepSchema::new("Loan Details")
                .field(FormField::text("loanType").required("Please select a loan type"))
                .field(
                    FormField::numeric("loanAmount")
                        .required(amount_message.clone())
                        .range(
                            Some(config.loan_amount_min),
                            Some(config.loan_amount_max),
                            amount_message,
                        ),
                )
                .field(
                    FormField::numeric("income")
                        .required("Please enter a valid annual income")
                        .range(Some(0.0), None, "Please enter a valid annual income"),
                ),
        )
        .step(
            StepSchema::new("Payment Card")
                .field(FormField::text("cardName").required("Please enter cardholder name"))
                .field(
                    FormField::text("cardNumber")
                        .required("Please enter a valid card number")
                        .pattern(Pattern::CardNumber, "Please enter a valid card number"),
                )
                .field(
                    FormField::text("expiryDate")
                        .required("Please enter expiry date in MM/YY format")
                        .pattern(Pattern::Expiry, "Please enter expiry date in MM/YY format"),
                )
                .field(
                    FormField::text("cvcField")
                        .required("Please enter a valid CVV")
                        .pattern(Pattern::Cvv, "Please enter a valid CVV"),
                ),
        )
        .step(
            StepSchema::new("Verification")
                .field(FormField::text("address").required("Please enter your full address"))
                .field(
                    FormField::text("zipCode")
                        .required("Please enter a valid 5-digit ZIP code")
                        .pattern(Pattern::Zip, "Please enter a valid 5-digit ZIP code"),
                )
                .field(
                    FormField::text("ssn")
                        .required("Please enter a valid SSN (000-00-0000)")
                        .pattern(Pattern::Ssn, "Please enter a valid SSN (000-00-0000)"),
                )
                .field(FormField::checkbox("terms").required("You must agree to the terms")),
        )
        .build()
}

/// Account registration
pub fn signup_schema() -> Result<FormSchema, SchemaError> {
    FormSchema::builder(FormKind::Signup.name(), 1)
        .step(
            StepSchema::new("Create Account")
                .field(
                    FormField::text("fullName")
                        .required("Full name is required")
                        .min_length(3, "Name must be at least {length} characters")
                        .pattern(
                            Pattern::PersonName,
                            "Name can only contain letters, spaces, hyphens and apostrophes",
                        ),
                )
                .field(
                    FormField::text("signupEmail")
                        .required("Email is required")
                        .pattern(Pattern::Email, "Please enter a valid email address"),
                )
                .field(
                    FormField::text("phoneNumber")
                        .required("Phone number is required")
                        .pattern(Pattern::Phone, "Please enter a valid phone number"),
                )
                .field(
                    FormField::text("signupPassword")
                        .untrimmed()
                        .required("Password is required")
                        .min_length(8, "Password must be at least {length} characters")
                        .pattern(
                            Pattern::StrongPassword,
                            "Password must contain uppercase, lowercase, and number",
                        ),
                )
                .field(
                    FormField::text("confirmPassword")
                        .untrimmed()
                        .required("Please confirm your password")
                        .equals_field("signupPassword", "Passwords do not match"),
                )
                .field(FormField::checkbox("agreeTerms").required(
                    "Please agree to the Terms of Service and Privacy Policy to continue.",
                )),
        )
        .build()
}

/// Sign in
pub fn login_schema() -> Result<FormSchema, SchemaError> {
    FormSchema::builder(FormKind::Login.name(), 1)
        .step(
            StepSchema::new("Sign In")
                .field(
                    FormField::text("loginEmail")
                        .required("Email is required")
                        .pattern(Pattern::Email, "Please enter a valid email address"),
                )
                .field(
                    FormField::text("loginPassword")
                        .untrimmed()
                        .required("Password is required")
                        .min_length(6, "Password must be at least {length} characters"),
                ),
        )
        .build()
}

/// Admin form for the accounts clients pay processing fees into
pub fn payment_account_schema() -> Result<FormSchema, SchemaError> {
    FormSchema::builder(FormKind::PaymentAccount.name(), 1)
        .step(
            StepSchema::new("Payment Account")
                .field(FormField::text("accountName").required("Please enter an account name"))
                .field(FormField::text("accountType").required("Please select an account type"))
                .field(
                    FormField::text("accountNumber")
                        .required("Please enter the account number")
                        .pattern(Pattern::Digits, "Account number can only contain digits"),
                )
                .field(
                    FormField::text("routingNumber")
                        .required("Please enter the routing number")
                        .pattern(Pattern::RoutingNumber, "Routing number must be exactly 9 digits"),
                )
                .field(
                    FormField::text("accountHolder")
                        .required("Please enter the account holder name"),
                ),
        )
        .build()
}

fn whole_dollars(amount: f64) -> Result<String, SchemaError> {
    Money::from_f64(amount, Currency::USD)
        .map(|money| money.format_whole())
        .map_err(|e| SchemaError::configuration(e.to_string()))
}
