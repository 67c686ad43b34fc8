//! Multi-Step Form Validator Tests
//!
//! # Test Organization
//!
//! - `step_validation` - per-field short-circuit and error aggregation
//! - `state_machine` - advance, retreat and reset transitions
//! - `end_to_end` - two-step contact form walk-through
//! - `stored_results` - results read back from JSON
//! - `whole_form` - validating every step at once
//! - `properties` - generated inputs checked with proptest

use std::collections::HashMap;

use domain_application::{
    FormField, FormSchema, FormValidation, MultiStepFormValidator, Pattern, StepResult,
    StepSchema, STEP_ERROR_KEY,
};
use test_utils::{assert_field_error, assert_step_valid};

/// Step 1 collects a full name and email, step 2 a consent checkbox
fn contact_schema() -> FormSchema {
    FormSchema::builder("contact", 1)
        .step(
            StepSchema::new("About you")
                .field(
                    FormField::text("fullname")
                        .required("Please enter your full name")
                        .pattern(Pattern::FullName, "Please enter first and last name"),
                )
                .field(
                    FormField::text("email")
                        .required("Please enter your email")
                        .pattern(Pattern::Email, "Please enter a valid email address"),
                ),
        )
        .step(
            StepSchema::new("Consent")
                .field(FormField::checkbox("terms").required("You must agree to the terms")),
        )
        .build()
        .unwrap()
}

fn valid_contact() -> HashMap<&'static str, &'static str> {
    HashMap::from([("fullname", "Jane Doe"), ("email", "jane@x.com")])
}

mod step_validation {
    use super::*;

    #[test]
    fn test_first_failing_rule_wins() {
        let validator = MultiStepFormValidator::new(contact_schema());
        let values = HashMap::from([("fullname", ""), ("email", "jane@x.com")]);

        let result = validator.validate_step(1, &values);

        // Required fails first, so the pattern message is never reported
        assert_field_error(&result, "fullname", "Please enter your full name");
    }

    #[test]
    fn test_all_fields_are_reported() {
        let validator = MultiStepFormValidator::new(contact_schema());
        let values = HashMap::from([("fullname", "Jane"), ("email", "bad")]);

        let result = validator.validate_step(1, &values);

        assert_eq!(result.error_count(), 2);
        assert_field_error(&result, "fullname", "Please enter first and last name");
        assert_field_error(&result, "email", "Please enter a valid email address");
    }

    #[test]
    fn test_missing_values_are_treated_as_empty() {
        let validator = MultiStepFormValidator::new(contact_schema());
        let values: HashMap<&str, &str> = HashMap::new();

        let result = validator.validate_step(1, &values);

        assert_field_error(&result, "fullname", "Please enter your full name");
        assert_field_error(&result, "email", "Please enter your email");
    }

    #[test]
    fn test_values_are_trimmed() {
        let validator = MultiStepFormValidator::new(contact_schema());
        let values = HashMap::from([("fullname", "  Jane Doe  "), ("email", " jane@x.com\t")]);

        assert_step_valid(&validator.validate_step(1, &values));
    }

    #[test]
    fn test_whitespace_only_fails_required() {
        let validator = MultiStepFormValidator::new(contact_schema());
        let values = HashMap::from([("fullname", "   "), ("email", "jane@x.com")]);

        let result = validator.validate_step(1, &values);
        assert_field_error(&result, "fullname", "Please enter your full name");
    }

    #[test]
    fn test_unchecked_terms_fails() {
        let validator = MultiStepFormValidator::new(contact_schema());

        for unchecked in ["", "off", "false"] {
            let values = HashMap::from([("terms", unchecked)]);
            let result = validator.validate_step(2, &values);
            assert!(!result.is_valid());
            assert!(!result.error_for("terms").unwrap_or_default().is_empty());
        }
    }

    #[test]
    fn test_unknown_step_is_reported_not_raised() {
        let validator = MultiStepFormValidator::new(contact_schema());
        let values = valid_contact();

        for index in [0, 3, 99] {
            let result = validator.validate_step(index, &values);
            assert!(!result.is_valid());
            assert!(result.error_for(STEP_ERROR_KEY).is_some());
            assert_eq!(result.step_index(), index);
        }
    }

    #[test]
    fn test_extra_values_are_ignored() {
        let validator = MultiStepFormValidator::new(contact_schema());
        let mut values = valid_contact();
        values.insert("unrelated", "???");

        assert_step_valid(&validator.validate_step(1, &values));
    }

    #[test]
    fn test_validation_does_not_move_the_step() {
        let validator = MultiStepFormValidator::new(contact_schema());
        let _ = validator.validate_step(2, &valid_contact());
        assert_eq!(validator.current_step(), 1);
    }
}

mod state_machine {
    use super::*;

    #[test]
    fn test_starts_at_step_one() {
        let validator = MultiStepFormValidator::new(contact_schema());
        assert_eq!(validator.current_step(), 1);
        assert_eq!(validator.step_count(), 2);
        assert!(!validator.is_final_step());
    }

    #[test]
    fn test_retreat_from_first_step_stays_at_one() {
        let mut validator = MultiStepFormValidator::new(contact_schema());
        assert_eq!(validator.retreat(), 1);
        assert_eq!(validator.retreat(), 1);
        assert_eq!(validator.current_step(), 1);
    }

    #[test]
    fn test_retreat_needs_no_valid_values() {
        let mut validator = MultiStepFormValidator::new(contact_schema());
        assert!(validator.advance(&valid_contact()).accepted);

        assert_eq!(validator.retreat(), 1);
    }

    #[test]
    fn test_unchecked_terms_blocks_advance() {
        let mut validator = MultiStepFormValidator::new(contact_schema());
        assert!(validator.advance(&valid_contact()).accepted);

        let outcome = validator.advance(&HashMap::from([("terms", "")]));

        assert!(!outcome.accepted);
        assert!(outcome.result.error_for("terms").is_some());
        assert_eq!(validator.current_step(), 2);
    }

    #[test]
    fn test_no_forward_transition_from_final_step() {
        let mut validator = MultiStepFormValidator::new(contact_schema());
        assert!(validator.advance(&valid_contact()).accepted);
        assert!(validator.is_final_step());

        let outcome = validator.advance(&HashMap::from([("terms", "on")]));

        assert!(!outcome.accepted);
        assert_step_valid(&outcome.result);
        assert_eq!(validator.current_step(), 2);
    }

    #[test]
    fn test_reset_returns_to_first_step() {
        let mut validator = MultiStepFormValidator::new(contact_schema());
        assert!(validator.advance(&valid_contact()).accepted);

        validator.reset();

        assert_eq!(validator.current_step(), 1);
    }

    #[test]
    fn test_sessions_are_independent() {
        let schema = std::sync::Arc::new(contact_schema());
        let mut first = MultiStepFormValidator::shared(schema.clone());
        let second = MultiStepFormValidator::shared(schema);

        assert!(first.advance(&valid_contact()).accepted);

        assert_eq!(first.current_step(), 2);
        assert_eq!(second.current_step(), 1);
        assert_ne!(first.session_id(), second.session_id());
    }
}

mod end_to_end {
    use super::*;

    #[test]
    fn test_valid_first_step_advances() {
        let mut validator = MultiStepFormValidator::new(contact_schema());

        let outcome = validator.advance(&valid_contact());

        assert!(outcome.accepted);
        assert_step_valid(&outcome.result);
        assert_eq!(validator.current_step(), 2);
    }

    #[test]
    fn test_invalid_first_step_stays() {
        let mut validator = MultiStepFormValidator::new(contact_schema());
        let values = HashMap::from([("fullname", "Jane"), ("email", "bad")]);

        let outcome = validator.advance(&values);

        assert!(!outcome.accepted);
        assert!(outcome.result.error_for("fullname").is_some());
        assert!(outcome.result.error_for("email").is_some());
        assert_eq!(validator.current_step(), 1);
    }

    #[test]
    fn test_outcome_serializes_for_display() {
        let mut validator = MultiStepFormValidator::new(contact_schema());
        let outcome = validator.advance(&HashMap::from([("fullname", "Jane"), ("email", "bad")]));

        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["accepted"], false);
        assert_eq!(json["result"]["step_index"], 1);
        assert_eq!(json["result"]["is_valid"], false);
        assert_eq!(
            json["result"]["field_errors"]["email"],
            "Please enter a valid email address"
        );
    }
}

mod stored_results {
    use super::*;

    #[test]
    fn test_step_result_validity_follows_errors_when_read_back() {
        let json = r#"{"step_index":1,"field_errors":{"email":"bad"},"is_valid":true}"#;

        let result: StepResult = serde_json::from_str(json).unwrap();

        assert!(!result.is_valid());
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.error_for("email"), Some("bad"));
    }

    #[test]
    fn test_step_result_without_errors_reads_back_valid() {
        let json = r#"{"step_index":2,"field_errors":{},"is_valid":false}"#;

        let result: StepResult = serde_json::from_str(json).unwrap();

        assert!(result.is_valid());
        assert_eq!(result.step_index(), 2);
    }

    #[test]
    fn test_form_validation_round_trips() {
        let validator = MultiStepFormValidator::new(contact_schema());
        let report = validator.validate_all(&valid_contact());

        let json = serde_json::to_string(&report).unwrap();
        let restored: FormValidation = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, report);
        assert_eq!(restored.first_invalid_step(), Some(2));
    }
}

mod whole_form {
    use super::*;

    #[test]
    fn test_validate_all_reports_every_step() {
        let validator = MultiStepFormValidator::new(contact_schema());

        let report = validator.validate_all(&valid_contact());

        assert_eq!(report.steps().len(), 2);
        assert!(report.steps()[0].is_valid());
        assert!(!report.steps()[1].is_valid());
        assert!(!report.is_valid());
        assert_eq!(report.first_invalid_step(), Some(2));
    }

    #[test]
    fn test_validate_all_passes_with_every_value() {
        let validator = MultiStepFormValidator::new(contact_schema());
        let mut values = valid_contact();
        values.insert("terms", "on");

        let report = validator.validate_all(&values);

        assert!(report.is_valid());
        assert_eq!(report.first_invalid_step(), None);
        assert_eq!(validator.current_step(), 1);
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;
    use test_utils::generators::email_strategy;

    proptest! {
        #[test]
        fn retreat_never_goes_below_one(
            moves in proptest::collection::vec(any::<bool>(), 0..20),
        ) {
            let mut validator = MultiStepFormValidator::new(contact_schema());
            let mut values = valid_contact();
            values.insert("terms", "on");

            for forward in moves {
                if forward {
                    validator.advance(&values);
                } else {
                    validator.retreat();
                }
                prop_assert!(validator.current_step() >= 1);
                prop_assert!(validator.current_step() <= validator.step_count());
            }
        }

        #[test]
        fn generated_emails_pass_the_first_step(email in email_strategy()) {
            let validator = MultiStepFormValidator::new(contact_schema());
            let values = HashMap::from([("fullname", "Jane Doe"), ("email", email.as_str())]);
            prop_assert!(validator.validate_step(1, &values).is_valid());
        }

        #[test]
        fn invalid_input_never_advances(name in "[A-Za-z]{1,12}") {
            let mut validator = MultiStepFormValidator::new(contact_schema());
            let values = HashMap::from([("fullname", name.as_str()), ("email", "jane@x.com")]);

            let outcome = validator.advance(&values);

            prop_assert!(!outcome.accepted);
            prop_assert_eq!(validator.current_step(), 1);
        }
    }
}
