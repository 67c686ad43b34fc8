//! Command output documents

use core_kernel::{ApplicationId, FormSessionId, QuoteId};
use domain_application::{FormValidation, StepResult};
use domain_loan::{AmortizationRow, FeeQuote, LoanQuoteInput, LoanQuoteResult, PaymentCode, QuoteSummary};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote_id: QuoteId,
    pub input: LoanQuoteInput,
    pub quote: LoanQuoteResult,
    pub rounded: QuoteSummary,
    /// Whole-dollar figures as the calculator widget shows them
    pub display: QuoteDisplay,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<AmortizationRow>>,
}

#[derive(Debug, Serialize)]
pub struct QuoteDisplay {
    pub monthly_payment: String,
    pub total_interest: String,
    pub total_repayment: String,
}

#[derive(Debug, Serialize)]
pub struct FeesResponse {
    pub requested: String,
    pub quote: FeeQuote,
    pub total_display: String,
}

#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub form: String,
    pub version: u32,
    pub session_id: FormSessionId,
    pub result: StepResult,
}

#[derive(Debug, Serialize)]
pub struct FormResponse {
    pub form: String,
    pub version: u32,
    pub session_id: FormSessionId,
    pub is_valid: bool,
    /// Reference issued once every step passes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<ApplicationId>,
    pub validation: FormValidation,
}

#[derive(Debug, Serialize)]
pub struct PaymentCodeResponse {
    pub code: PaymentCode,
}
