//! Multi-step form validator
//!
//! One [`MultiStepFormValidator`] is owned per active form session. It
//! tracks the current step and validates the values the caller passes in;
//! it never stores field values between calls.
//!
//! # State machine
//!
//! ```text
//! 1 ──advance (valid)──▶ 2 ──advance (valid)──▶ ... ──▶ N
//! ▲                      │
//! └──────retreat─────────┘
//! ```
//!
//! Moving forward requires the current step to validate; moving back never
//! does. There is no forward transition out of the final step.

use std::collections::BTreeMap;
use std::sync::Arc;

use core_kernel::FormSessionId;
use tracing::debug;

use crate::result::{AdvanceOutcome, FormValidation, StepResult, STEP_ERROR_KEY};
use crate::schema::{FieldValues, FormSchema};

/// Step-by-step validator for one form session
#[derive(Debug, Clone)]
pub struct MultiStepFormValidator {
    session_id: FormSessionId,
    schema: Arc<FormSchema>,
    current_step: usize,
}

impl MultiStepFormValidator {
    /// Creates a validator positioned at step 1
    pub fn new(schema: FormSchema) -> Self {
        Self::shared(Arc::new(schema))
    }

    /// Creates a validator over a schema shared between sessions
    pub fn shared(schema: Arc<FormSchema>) -> Self {
        let session_id = FormSessionId::new();
        debug!(
            %session_id,
            form = schema.name(),
            version = schema.version(),
            steps = schema.step_count(),
            "Started form session"
        );
        Self {
            session_id,
            schema,
            current_step: 1,
        }
    }

    pub fn session_id(&self) -> FormSessionId {
        self.session_id
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Current 1-based step index
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step_count(&self) -> usize {
        self.schema.step_count()
    }

    pub fn is_final_step(&self) -> bool {
        self.current_step == self.schema.step_count()
    }

    /// Validates one step against the given values
    ///
    /// Every field of the step is evaluated, so all failing fields are
    /// reported together. An index outside `1..=step_count` yields an
    /// invalid result with a single error under [`STEP_ERROR_KEY`].
    pub fn validate_step(&self, step_index: usize, values: &impl FieldValues) -> StepResult {
        let Some(step) = self.schema.step(step_index) else {
            let mut field_errors = BTreeMap::new();
            field_errors.insert(
                STEP_ERROR_KEY.to_string(),
                format!(
                    "Step {} does not exist; form has {} steps",
                    step_index,
                    self.schema.step_count()
                ),
            );
            return StepResult::new(step_index, field_errors);
        };

        let field_errors: BTreeMap<String, String> = step
            .fields()
            .iter()
            .filter_map(|field| {
                field
                    .first_error(values)
                    .map(|message| (field.id().to_string(), message))
            })
            .collect();

        let result = StepResult::new(step_index, field_errors);
        debug!(
            session_id = %self.session_id,
            step = step_index,
            valid = result.is_valid(),
            errors = result.error_count(),
            "Validated form step"
        );
        result
    }

    /// Validates the current step
    pub fn validate_current(&self, values: &impl FieldValues) -> StepResult {
        self.validate_step(self.current_step, values)
    }

    /// Validates the current step and moves forward if it passes
    ///
    /// At the final step the values are still validated but the step does
    /// not change and `accepted` is false.
    pub fn advance(&mut self, values: &impl FieldValues) -> AdvanceOutcome {
        let result = self.validate_current(values);
        let accepted = result.is_valid() && !self.is_final_step();

        if accepted {
            self.current_step += 1;
            debug!(
                session_id = %self.session_id,
                step = self.current_step,
                "Advanced to next step"
            );
        }

        AdvanceOutcome { accepted, result }
    }

    /// Moves back one step without validating; stays at step 1
    pub fn retreat(&mut self) -> usize {
        if self.current_step > 1 {
            self.current_step -= 1;
            debug!(
                session_id = %self.session_id,
                step = self.current_step,
                "Moved back one step"
            );
        }
        self.current_step
    }

    /// Returns to step 1
    pub fn reset(&mut self) {
        self.current_step = 1;
        debug!(session_id = %self.session_id, "Reset form session");
    }

    /// Validates every step without changing the current step
    pub fn validate_all(&self, values: &impl FieldValues) -> FormValidation {
        let steps = (1..=self.schema.step_count())
            .map(|index| self.validate_step(index, values))
            .collect();
        FormValidation::new(steps)
    }
}
