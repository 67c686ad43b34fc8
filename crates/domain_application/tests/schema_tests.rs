//! Form Schema Tests
//!
//! # Test Organization
//!
//! - `construction` - malformed schemas fail at build time
//! - `rule_semantics` - each rule kind against a single field
//! - `formats` - the built-in patterns
//! - `properties` - generated card numbers and phones

use std::collections::HashMap;

use domain_application::checks::{is_card_number, is_email, luhn_check};
use domain_application::{
    CustomPredicate, FieldValues, FormField, FormSchema, MultiStepFormValidator, Pattern,
    SchemaError, StepSchema,
};
use test_utils::{assert_field_error, assert_field_ok, assert_step_valid};

fn single_step(field: FormField) -> MultiStepFormValidator {
    let schema = FormSchema::builder("single", 1)
        .step(StepSchema::new("Only").field(field))
        .build()
        .unwrap();
    MultiStepFormValidator::new(schema)
}

fn one(field_id: &'static str, value: &'static str) -> HashMap<&'static str, &'static str> {
    HashMap::from([(field_id, value)])
}

mod construction {
    use super::*;

    #[test]
    fn test_form_without_steps_is_rejected() {
        let result = FormSchema::builder("empty", 1).build();
        assert_eq!(result.unwrap_err(), SchemaError::NoSteps("empty".to_string()));
    }

    #[test]
    fn test_step_without_fields_is_rejected() {
        let result = FormSchema::builder("form", 1)
            .step(StepSchema::new("One").field(FormField::text("a")))
            .step(StepSchema::new("Two"))
            .build();
        assert_eq!(result.unwrap_err(), SchemaError::EmptyStep { step: 2 });
    }

    #[test]
    fn test_blank_field_id_is_rejected() {
        let result = FormSchema::builder("form", 1)
            .step(StepSchema::new("One").field(FormField::text("  ")))
            .build();
        assert_eq!(result.unwrap_err(), SchemaError::EmptyFieldId { step: 1 });
    }

    #[test]
    fn test_duplicate_ids_across_steps_are_rejected() {
        let result = FormSchema::builder("form", 1)
            .step(StepSchema::new("One").field(FormField::text("email")))
            .step(StepSchema::new("Two").field(FormField::text("email")))
            .build();
        assert_eq!(result.unwrap_err(), SchemaError::DuplicateField("email".to_string()));
    }

    #[test]
    fn test_cross_field_reference_must_exist() {
        let result = FormSchema::builder("form", 1)
            .step(
                StepSchema::new("One")
                    .field(FormField::text("confirm").equals_field("password", "Mismatch")),
            )
            .build();
        assert!(matches!(
            result.unwrap_err(),
            SchemaError::UnknownReference { field, referenced }
                if field == "confirm" && referenced == "password"
        ));
    }

    #[test]
    fn test_cross_field_reference_must_be_in_same_step() {
        let result = FormSchema::builder("form", 1)
            .step(StepSchema::new("One").field(FormField::text("password")))
            .step(
                StepSchema::new("Two")
                    .field(FormField::text("confirm").equals_field("password", "Mismatch")),
            )
            .build();
        assert!(matches!(result, Err(SchemaError::UnknownReference { .. })));
    }

    #[test]
    fn test_self_reference_is_rejected() {
        let result = FormSchema::builder("form", 1)
            .step(StepSchema::new("One").field(FormField::text("a").equals_field("a", "x")))
            .build();
        assert!(matches!(result, Err(SchemaError::UnknownReference { .. })));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let result = FormSchema::builder("form", 1)
            .step(
                StepSchema::new("One")
                    .field(FormField::numeric("amount").range(Some(10.0), Some(1.0), "x")),
            )
            .build();
        assert!(matches!(result, Err(SchemaError::InvalidRange { .. })));
    }

    #[test]
    fn test_nan_range_is_rejected() {
        let result = FormSchema::builder("form", 1)
            .step(StepSchema::new("One").field(FormField::numeric("amount").range(
                Some(f64::NAN),
                None,
                "x",
            )))
            .build();
        assert!(matches!(result, Err(SchemaError::InvalidRange { .. })));
    }

    #[test]
    fn test_schema_accessors() {
        let schema = FormSchema::builder("form", 3)
            .step(StepSchema::new("One").field(FormField::text("a")))
            .step(StepSchema::new("Two").field(FormField::checkbox("b")))
            .build()
            .unwrap();

        assert_eq!(schema.name(), "form");
        assert_eq!(schema.version(), 3);
        assert_eq!(schema.step_count(), 2);
        assert_eq!(schema.step(2).unwrap().title(), "Two");
        assert!(schema.step(0).is_none());
        assert!(schema.step(3).is_none());
        assert!(schema.step(1).unwrap().get("a").is_some());
    }
}

mod rule_semantics {
    use super::*;

    #[test]
    fn test_optional_blank_field_skips_other_rules() {
        let validator = single_step(FormField::text("nickname").min_length(3, "Too short"));

        assert_step_valid(&validator.validate_step(1, &one("nickname", "")));
        assert_field_error(&validator.validate_step(1, &one("nickname", "ab")), "nickname", "Too short");
    }

    #[test]
    fn test_min_length_counts_characters() {
        let validator = single_step(
            FormField::text("name")
                .required("Required")
                .min_length(3, "At least {length} characters"),
        );

        assert_step_valid(&validator.validate_step(1, &one("name", "Zoë")));
        assert_field_error(
            &validator.validate_step(1, &one("name", "Jo")),
            "name",
            "At least 3 characters",
        );
    }

    #[test]
    fn test_range_is_inclusive() {
        let validator = single_step(
            FormField::numeric("amount")
                .required("Required")
                .range(Some(1000.0), Some(500_000.0), "Between {min} and {max}"),
        );

        assert_step_valid(&validator.validate_step(1, &one("amount", "1000")));
        assert_step_valid(&validator.validate_step(1, &one("amount", "500000")));
        assert_field_error(
            &validator.validate_step(1, &one("amount", "999.99")),
            "amount",
            "Between 1000 and 500000",
        );
        assert!(!validator.validate_step(1, &one("amount", "500000.01")).is_valid());
    }

    #[test]
    fn test_range_rejects_formatted_numbers() {
        let validator = single_step(
            FormField::numeric("amount")
                .required("Required")
                .range(Some(0.0), None, "Invalid"),
        );

        assert_field_error(&validator.validate_step(1, &one("amount", "10,000")), "amount", "Invalid");
        assert_field_error(&validator.validate_step(1, &one("amount", "$500")), "amount", "Invalid");
        assert_field_error(&validator.validate_step(1, &one("amount", "inf")), "amount", "Invalid");
    }

    #[test]
    fn test_equals_field() {
        let schema = FormSchema::builder("passwords", 1)
            .step(
                StepSchema::new("One")
                    .field(FormField::text("password").required("Required"))
                    .field(
                        FormField::text("confirm")
                            .required("Please confirm")
                            .equals_field("password", "Must match {other}"),
                    ),
            )
            .build()
            .unwrap();
        let validator = MultiStepFormValidator::new(schema);

        let same = HashMap::from([("password", "Secret123"), ("confirm", "Secret123")]);
        let different = HashMap::from([("password", "Secret123"), ("confirm", "Secret124")]);

        assert_step_valid(&validator.validate_step(1, &same));
        let result = validator.validate_step(1, &different);
        assert_field_error(&result, "confirm", "Must match password");
        assert_field_ok(&result, "password");
    }

    #[test]
    fn test_blank_optional_confirmation_still_compared() {
        let schema = FormSchema::builder("emails", 1)
            .step(
                StepSchema::new("One")
                    .field(
                        FormField::text("email")
                            .required("Required")
                            .pattern(Pattern::Email, "Invalid email"),
                    )
                    .field(
                        FormField::text("confirmEmail")
                            .pattern(Pattern::Email, "Invalid email")
                            .equals_field("email", "Emails do not match"),
                    ),
            )
            .build()
            .unwrap();
        let validator = MultiStepFormValidator::new(schema);

        let blank = HashMap::from([("email", "a@b.co"), ("confirmEmail", "")]);
        let result = validator.validate_step(1, &blank);
        assert_field_error(&result, "confirmEmail", "Emails do not match");
        assert_field_ok(&result, "email");

        let both_blank = HashMap::from([("email", ""), ("confirmEmail", "")]);
        assert_field_ok(&validator.validate_step(1, &both_blank), "confirmEmail");
    }

    #[test]
    fn test_blank_optional_field_runs_custom_predicate() {
        let validator = single_step(
            FormField::text("referral")
                .min_length(4, "Too short")
                .custom(CustomPredicate::new("present", |v| !v.is_empty()), "Referral code missing"),
        );

        assert_field_error(
            &validator.validate_step(1, &one("referral", "  ")),
            "referral",
            "Referral code missing",
        );
    }

    #[test]
    fn test_untrimmed_fields_keep_whitespace() {
        let schema = FormSchema::builder("secrets", 1)
            .step(
                StepSchema::new("One")
                    .field(FormField::text("password").untrimmed().required("Required"))
                    .field(
                        FormField::text("confirm")
                            .untrimmed()
                            .required("Please confirm")
                            .equals_field("password", "Must match"),
                    ),
            )
            .build()
            .unwrap();
        let validator = MultiStepFormValidator::new(schema);
        assert!(!schema_field_trims(&validator, "password"));

        let padded = HashMap::from([("password", "Secret123 "), ("confirm", "Secret123")]);
        assert_field_error(&validator.validate_step(1, &padded), "confirm", "Must match");

        let exact = HashMap::from([("password", " Secret123 "), ("confirm", " Secret123 ")]);
        assert_step_valid(&validator.validate_step(1, &exact));

        let spaces = HashMap::from([("password", "   "), ("confirm", "   ")]);
        assert_field_error(&validator.validate_step(1, &spaces), "password", "Required");
    }

    #[test]
    fn test_trimmed_fields_ignore_padding() {
        let validator = single_step(
            FormField::text("email")
                .required("Required")
                .pattern(Pattern::Email, "Invalid email"),
        );
        assert!(schema_field_trims(&validator, "email"));
        assert_step_valid(&validator.validate_step(1, &one("email", "  a@b.co  ")));
    }

    fn schema_field_trims(validator: &MultiStepFormValidator, field_id: &str) -> bool {
        validator
            .schema()
            .step(1)
            .and_then(|step| step.get(field_id))
            .map(|field| field.trims())
            .unwrap_or(true)
    }

    #[test]
    fn test_differs_from_field() {
        let schema = FormSchema::builder("password-change", 1)
            .step(
                StepSchema::new("One")
                    .field(FormField::text("current").required("Required"))
                    .field(
                        FormField::text("next")
                            .required("Required")
                            .differs_from_field("current", "Choose a new password"),
                    ),
            )
            .build()
            .unwrap();
        let validator = MultiStepFormValidator::new(schema);

        let same = HashMap::from([("current", "abc"), ("next", "abc")]);
        assert_field_error(&validator.validate_step(1, &same), "next", "Choose a new password");
    }

    #[test]
    fn test_custom_predicate() {
        let validator = single_step(
            FormField::text("code")
                .required("Required")
                .custom(CustomPredicate::new("upper", |v| v.chars().all(|c| c.is_ascii_uppercase())), "Uppercase only"),
        );

        assert_step_valid(&validator.validate_step(1, &one("code", "ABC")));
        assert_field_error(&validator.validate_step(1, &one("code", "AbC")), "code", "Uppercase only");
    }

    #[test]
    fn test_checkbox_checked_signals() {
        let validator = single_step(FormField::checkbox("terms").required("Agree"));

        for checked in ["on", "true", "TRUE", "checked", "yes", "1"] {
            assert_step_valid(&validator.validate_step(1, &one("terms", checked)));
        }
        for unchecked in ["", "off", "no", "0"] {
            assert_field_error(&validator.validate_step(1, &one("terms", unchecked)), "terms", "Agree");
        }
    }

    #[test]
    fn test_field_placeholder() {
        let validator = single_step(FormField::text("email").required("{field} is required"));
        assert_field_error(&validator.validate_step(1, &one("email", "")), "email", "email is required");
    }

    #[test]
    fn test_custom_field_values_source() {
        struct Fixed;
        impl FieldValues for Fixed {
            fn value(&self, _: &str) -> Option<&str> {
                Some("value")
            }
        }

        let validator = single_step(FormField::text("anything").required("Required"));
        assert_step_valid(&validator.validate_step(1, &Fixed));
    }
}

mod formats {
    use super::*;

    #[test]
    fn test_email_examples() {
        assert!(is_email("a@b.co"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a.b.com"));
        assert!(!is_email("a b@c.com"));
        assert!(!is_email("@b.co"));
    }

    #[test]
    fn test_luhn_examples() {
        assert!(luhn_check("4111111111111111"));
        assert!(!luhn_check("4111111111111112"));
    }

    #[test]
    fn test_card_number_strips_spaces() {
        assert!(is_card_number("4111 1111 1111 1111"));
        assert!(!is_card_number("4111-1111-1111-1111"));
        // Luhn-valid but too short
        assert!(!is_card_number("79927398713"));
    }

    #[test]
    fn test_patterns() {
        assert!(Pattern::Phone.matches("(555) 123-4567"));
        assert!(!Pattern::Phone.matches("555-1234"));
        assert!(!Pattern::Phone.matches("555.123.4567"));
        assert!(Pattern::Ssn.matches("123-45-6789"));
        assert!(!Pattern::Ssn.matches("123456789"));
        assert!(Pattern::Zip.matches("90210"));
        assert!(!Pattern::Zip.matches("9021"));
        assert!(Pattern::RoutingNumber.matches("021000021"));
        assert!(!Pattern::RoutingNumber.matches("02100002"));
        assert!(Pattern::Expiry.matches("12/29"));
        assert!(!Pattern::Expiry.matches("13/29"));
        assert!(!Pattern::Expiry.matches("00/29"));
        assert!(Pattern::Cvv.matches("123"));
        assert!(Pattern::Cvv.matches("1234"));
        assert!(!Pattern::Cvv.matches("12"));
        assert!(Pattern::FullName.matches("Jane Doe"));
        assert!(!Pattern::FullName.matches("Jane"));
        assert!(Pattern::PersonName.matches("Mary-Jane O'Neil"));
        assert!(!Pattern::PersonName.matches("R2D2"));
        assert!(Pattern::StrongPassword.matches("Secret123"));
        assert!(!Pattern::StrongPassword.matches("secret123"));
        assert!(Pattern::Digits.matches("000123"));
        assert!(!Pattern::Digits.matches("12a"));
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;
    use test_utils::generators::{luhn_card_strategy, phone_strategy};

    proptest! {
        #[test]
        fn generated_cards_pass(card in luhn_card_strategy()) {
            prop_assert!(luhn_check(&card));
            prop_assert!(is_card_number(&card));
        }

        #[test]
        fn changing_one_digit_breaks_luhn(card in luhn_card_strategy(), bump in 1u32..10) {
            let last = card.chars().last().and_then(|c| c.to_digit(10)).unwrap();
            let replaced = char::from_digit((last + bump) % 10, 10).unwrap();
            let altered = format!("{}{}", &card[..card.len() - 1], replaced);
            prop_assert!(!luhn_check(&altered));
        }

        #[test]
        fn generated_phones_pass(phone in phone_strategy()) {
            prop_assert!(Pattern::Phone.matches(&phone));
        }
    }
}
