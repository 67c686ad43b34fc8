//! Outcomes of step and form validation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key under which a request for a step that does not exist is reported
pub const STEP_ERROR_KEY: &str = "_step";

/// Result of validating one step
///
/// Built fresh by every validation call and never modified afterwards.
/// Deserializing recomputes `is_valid` from the field errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StepResultRecord")]
pub struct StepResult {
    step_index: usize,
    field_errors: BTreeMap<String, String>,
    is_valid: bool,
}

impl StepResult {
    /// Creates a result from the collected field errors
    pub fn new(step_index: usize, field_errors: BTreeMap<String, String>) -> Self {
        let is_valid = field_errors.is_empty();
        Self {
            step_index,
            field_errors,
            is_valid,
        }
    }

    /// 1-based index of the validated step
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Error message per failing field; valid fields are absent
    pub fn field_errors(&self) -> &BTreeMap<String, String> {
        &self.field_errors
    }

    /// Error message for a single field, if it failed
    pub fn error_for(&self, field_id: &str) -> Option<&str> {
        self.field_errors.get(field_id).map(String::as_str)
    }

    /// True when no field failed
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn error_count(&self) -> usize {
        self.field_errors.len()
    }
}

#[derive(Deserialize)]
struct StepResultRecord {
    step_index: usize,
    #[serde(default)]
    field_errors: BTreeMap<String, String>,
}

impl From<StepResultRecord> for StepResult {
    fn from(record: StepResultRecord) -> Self {
        StepResult::new(record.step_index, record.field_errors)
    }
}

/// Result of trying to move to the next step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvanceOutcome {
    /// True when the current step moved forward
    pub accepted: bool,
    /// Validation of the step that was current when `advance` was called
    pub result: StepResult,
}

/// Result of validating every step of a form at once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValidation {
    steps: Vec<StepResult>,
}

impl FormValidation {
    pub fn new(steps: Vec<StepResult>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[StepResult] {
        &self.steps
    }

    /// True when every step is valid
    pub fn is_valid(&self) -> bool {
        self.steps.iter().all(StepResult::is_valid)
    }

    /// First step with errors, if any
    pub fn first_invalid_step(&self) -> Option<usize> {
        self.steps
            .iter()
            .find(|step| !step.is_valid())
            .map(StepResult::step_index)
    }
}
