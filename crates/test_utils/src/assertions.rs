//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_application::StepResult;
use rust_decimal::Decimal;

/// Asserts that two floats differ by no more than `tolerance`
///
/// # Panics
///
/// Panics if either value is not finite or the difference exceeds the tolerance
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        actual.is_finite() && expected.is_finite(),
        "Expected finite values: actual={}, expected={}",
        actual,
        expected
    );
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Values differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a step passed
pub fn assert_step_valid(result: &StepResult) {
    assert!(
        result.is_valid(),
        "Expected step {} to be valid, got errors: {:?}",
        result.step_index(),
        result.field_errors()
    );
}

/// Asserts that a field failed with exactly `message`
pub fn assert_field_error(result: &StepResult, field_id: &str, message: &str) {
    assert!(
        !result.is_valid(),
        "Expected step {} to be invalid",
        result.step_index()
    );
    match result.error_for(field_id) {
        Some(actual) => assert_eq!(
            actual, message,
            "Unexpected message for field '{}'",
            field_id
        ),
        None => panic!(
            "Expected an error for field '{}', got errors: {:?}",
            field_id,
            result.field_errors()
        ),
    }
}

/// Asserts that a field has no error
pub fn assert_field_ok(result: &StepResult, field_id: &str) {
    assert!(
        result.error_for(field_id).is_none(),
        "Expected no error for field '{}', got {:?}",
        field_id,
        result.error_for(field_id)
    );
}
