//! Declarative field rules
//!
//! A field carries an ordered list of [`ValidationRule`]s. Evaluation stops
//! at the first rule the value violates, and that rule's message becomes
//! the field's error.
//!
//! # Message templates
//!
//! Messages may contain placeholders that are filled in when the rule fails:
//!
//! | Placeholder | Replaced with |
//! |-------------|---------------|
//! | `{field}` | the field id |
//! | `{min}` / `{max}` | range bounds |
//! | `{length}` | required minimum length |
//! | `{other}` | the referenced field id of a cross-field rule |

use std::fmt;
use std::sync::Arc;

use crate::checks;

/// Built-in value formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// `^[^\s@]+@[^\s@]+\.[^\s@]+$`
    Email,
    /// At least 10 digits; only digits, spaces, `+ - ( )` allowed
    Phone,
    /// `000-00-0000`
    Ssn,
    /// Five digit ZIP code
    Zip,
    /// Nine digit bank routing number
    RoutingNumber,
    /// 13 to 19 digits passing the Luhn checksum
    CardNumber,
    /// `MM/YY`
    Expiry,
    /// Three or four digits
    Cvv,
    /// Two or more words
    FullName,
    /// Letters, spaces, hyphens and apostrophes
    PersonName,
    /// Lowercase, uppercase and digit all present
    StrongPassword,
    /// Digits only
    Digits,
}

impl Pattern {
    /// Returns true if the value has this format
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Pattern::Email => checks::is_email(value),
            Pattern::Phone => checks::is_phone(value),
            Pattern::Ssn => checks::is_ssn(value),
            Pattern::Zip => checks::is_zip(value),
            Pattern::RoutingNumber => checks::is_routing_number(value),
            Pattern::CardNumber => checks::is_card_number(value),
            Pattern::Expiry => checks::is_expiry(value),
            Pattern::Cvv => checks::is_cvv(value),
            Pattern::FullName => checks::is_full_name(value),
            Pattern::PersonName => checks::is_person_name(value),
            Pattern::StrongPassword => checks::is_strong_password(value),
            Pattern::Digits => checks::is_digits(value),
        }
    }
}

/// Comparison applied by a cross-field rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossFieldPredicate {
    /// Value must equal the referenced field's value
    Equals,
    /// Value must differ from the referenced field's value
    NotEquals,
}

impl CrossFieldPredicate {
    pub fn holds(&self, value: &str, other: &str) -> bool {
        match self {
            CrossFieldPredicate::Equals => value == other,
            CrossFieldPredicate::NotEquals => value != other,
        }
    }
}

/// A named caller-supplied check
#[derive(Clone)]
pub struct CustomPredicate {
    name: String,
    test: Arc<dyn Fn(&str) -> bool + Send + Sync>,
}

impl CustomPredicate {
    pub fn new(name: impl Into<String>, test: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            test: Arc::new(test),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn test(&self, value: &str) -> bool {
        (self.test)(value)
    }
}

impl fmt::Debug for CustomPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomPredicate")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// What a rule checks
#[derive(Debug, Clone)]
pub enum RuleKind {
    /// Non-blank text, or a checked checkbox
    Required,
    /// At least this many characters
    MinLength(usize),
    /// One of the built-in formats
    Pattern(Pattern),
    /// Numeric value within inclusive bounds; a missing bound is open
    Range { min: Option<f64>, max: Option<f64> },
    /// Comparison against another field of the same step
    CrossField {
        field: String,
        predicate: CrossFieldPredicate,
    },
    /// Arbitrary check
    Custom(CustomPredicate),
}

/// A rule together with the message reported when it fails
#[derive(Debug, Clone)]
pub struct ValidationRule {
    kind: RuleKind,
    message: String,
}

impl ValidationRule {
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Message template as declared
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if this rule is `Required`
    pub fn is_required(&self) -> bool {
        matches!(self.kind, RuleKind::Required)
    }

    /// Returns true if the rule still runs when an optional field is blank
    ///
    /// Format rules only describe non-empty values; comparisons and custom
    /// checks may reject an empty one.
    pub fn checks_blank(&self) -> bool {
        matches!(self.kind, RuleKind::CrossField { .. } | RuleKind::Custom(_))
    }

    /// Evaluates the rule against a field value
    ///
    /// `lookup` resolves the value of another field in the same step;
    /// `checkbox` switches `Required` to the checked signal. `Required`
    /// ignores surrounding whitespace even for untrimmed fields.
    pub(crate) fn check<'a>(
        &self,
        value: &str,
        checkbox: bool,
        lookup: impl Fn(&str) -> &'a str,
    ) -> bool {
        match &self.kind {
            RuleKind::Required if checkbox => checks::is_checked(value.trim()),
            RuleKind::Required => !value.trim().is_empty(),
            RuleKind::MinLength(length) => value.chars().count() >= *length,
            RuleKind::Pattern(pattern) => pattern.matches(value),
            RuleKind::Range { min, max } => match value.parse::<f64>() {
                Ok(number) if number.is_finite() => {
                    min.map_or(true, |min| number >= min) && max.map_or(true, |max| number <= max)
                }
                _ => false,
            },
            RuleKind::CrossField { field, predicate } => predicate.holds(value, lookup(field)),
            RuleKind::Custom(custom) => custom.test(value),
        }
    }

    /// Renders the failure message for a field
    pub fn render_message(&self, field_id: &str) -> String {
        let mut message = self.message.replace("{field}", field_id);
        match &self.kind {
            RuleKind::MinLength(length) => {
                message = message.replace("{length}", &length.to_string());
            }
            RuleKind::Range { min, max } => {
                if let Some(min) = min {
                    message = message.replace("{min}", &min.to_string());
                }
                if let Some(max) = max {
                    message = message.replace("{max}", &max.to_string());
                }
            }
            RuleKind::CrossField { field, .. } => {
                message = message.replace("{other}", field);
            }
            _ => {}
        }
        message
    }
}
