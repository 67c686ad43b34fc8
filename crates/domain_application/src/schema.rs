//! Form schemas
//!
//! A [`FormSchema`] is an ordered list of steps, each declaring the fields
//! collected on that step and their rules. Schemas are checked once, when
//! built, so validation itself can never fail.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::BuildHasher;

use crate::error::SchemaError;
use crate::rules::{CrossFieldPredicate, CustomPredicate, Pattern, RuleKind, ValidationRule};

/// Source of raw field values keyed by field id
///
/// Missing fields are treated as empty strings.
pub trait FieldValues {
    fn value(&self, field_id: &str) -> Option<&str>;
}

impl<S: BuildHasher> FieldValues for HashMap<String, String, S> {
    fn value(&self, field_id: &str) -> Option<&str> {
        self.get(field_id).map(String::as_str)
    }
}

impl<S: BuildHasher> FieldValues for HashMap<&str, &str, S> {
    fn value(&self, field_id: &str) -> Option<&str> {
        self.get(field_id).copied()
    }
}

impl FieldValues for BTreeMap<String, String> {
    fn value(&self, field_id: &str) -> Option<&str> {
        self.get(field_id).map(String::as_str)
    }
}

impl FieldValues for BTreeMap<&str, &str> {
    fn value(&self, field_id: &str) -> Option<&str> {
        self.get(field_id).copied()
    }
}

/// How a field's raw value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Clean numeric string, without separators or currency symbols
    Numeric,
    /// Checked signal (`"on"`, `"true"`, ...)
    Checkbox,
}

/// A field and its rules, evaluated in declaration order
#[derive(Debug, Clone)]
pub struct FormField {
    id: String,
    kind: FieldKind,
    trim: bool,
    rules: Vec<ValidationRule>,
}

impl FormField {
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            kind,
            trim: true,
            rules: Vec::new(),
        }
    }

    /// Creates a free text field
    pub fn text(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Text)
    }

    /// Creates a numeric field
    pub fn numeric(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Numeric)
    }

    /// Creates a checkbox field
    pub fn checkbox(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Checkbox)
    }

    /// Checks the value exactly as entered, surrounding whitespace included
    ///
    /// For secrets such as passwords, where `"pw "` and `"pw"` differ.
    pub fn untrimmed(mut self) -> Self {
        self.trim = false;
        self
    }

    /// Appends a rule
    pub fn rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn required(self, message: impl Into<String>) -> Self {
        self.rule(ValidationRule::new(RuleKind::Required, message))
    }

    pub fn min_length(self, length: usize, message: impl Into<String>) -> Self {
        self.rule(ValidationRule::new(RuleKind::MinLength(length), message))
    }

    pub fn pattern(self, pattern: Pattern, message: impl Into<String>) -> Self {
        self.rule(ValidationRule::new(RuleKind::Pattern(pattern), message))
    }

    pub fn range(self, min: Option<f64>, max: Option<f64>, message: impl Into<String>) -> Self {
        self.rule(ValidationRule::new(RuleKind::Range { min, max }, message))
    }

    /// Requires the value to equal another field of the same step
    pub fn equals_field(self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.rule(ValidationRule::new(
            RuleKind::CrossField {
                field: field.into(),
                predicate: CrossFieldPredicate::Equals,
            },
            message,
        ))
    }

    /// Requires the value to differ from another field of the same step
    pub fn differs_from_field(self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.rule(ValidationRule::new(
            RuleKind::CrossField {
                field: field.into(),
                predicate: CrossFieldPredicate::NotEquals,
            },
            message,
        ))
    }

    pub fn custom(self, predicate: CustomPredicate, message: impl Into<String>) -> Self {
        self.rule(ValidationRule::new(RuleKind::Custom(predicate), message))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// False for fields built with [`FormField::untrimmed`]
    pub fn trims(&self) -> bool {
        self.trim
    }

    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    /// Returns true if any rule is `Required`
    pub fn is_required(&self) -> bool {
        self.rules.iter().any(ValidationRule::is_required)
    }

    /// Evaluates the rules against `values` and returns the first failure message
    ///
    /// Values are trimmed before checking unless the field is untrimmed; an
    /// untrimmed field also compares against the raw value of the field it
    /// references. When a field with no `Required` rule is blank, only
    /// cross-field and custom rules run.
    pub fn first_error(&self, values: &impl FieldValues) -> Option<String> {
        let value = shape(values.value(&self.id), self.trim);
        let checkbox = self.kind == FieldKind::Checkbox;
        let blank_optional = value.trim().is_empty() && !self.is_required();

        let lookup = |id: &str| shape(values.value(id), self.trim);
        self.rules
            .iter()
            .filter(|rule| !blank_optional || rule.checks_blank())
            .find(|rule| !rule.check(value, checkbox, &lookup))
            .map(|rule| rule.render_message(&self.id))
    }
}

fn shape(raw: Option<&str>, trim: bool) -> &str {
    let raw = raw.unwrap_or("");
    if trim {
        raw.trim()
    } else {
        raw
    }
}

/// One step of a form
#[derive(Debug, Clone)]
pub struct StepSchema {
    title: String,
    fields: Vec<FormField>,
}

impl StepSchema {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Looks up a field by id
    pub fn get(&self, field_id: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.id == field_id)
    }
}

/// A named, versioned multi-step form
#[derive(Debug, Clone)]
pub struct FormSchema {
    name: String,
    version: u32,
    steps: Vec<StepSchema>,
}

impl FormSchema {
    /// Starts building a schema
    pub fn builder(name: impl Into<String>, version: u32) -> FormSchemaBuilder {
        FormSchemaBuilder {
            name: name.into(),
            version,
            steps: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Number of steps; always at least 1
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[StepSchema] {
        &self.steps
    }

    /// Returns the step at a 1-based index
    pub fn step(&self, step_index: usize) -> Option<&StepSchema> {
        step_index.checked_sub(1).and_then(|i| self.steps.get(i))
    }
}

/// Builder for [`FormSchema`]
#[derive(Debug)]
pub struct FormSchemaBuilder {
    name: String,
    version: u32,
    steps: Vec<StepSchema>,
}

impl FormSchemaBuilder {
    pub fn step(mut self, step: StepSchema) -> Self {
        self.steps.push(step);
        self
    }

    /// Checks the schema and builds it
    ///
    /// # Errors
    ///
    /// Returns a `SchemaError` when the form has no steps, a step has no
    /// fields, a field id is empty or repeated, a cross-field rule refers to
    /// a field outside its step (or to itself), or a range is NaN or inverted.
    pub fn build(self) -> Result<FormSchema, SchemaError> {
        if self.steps.is_empty() {
            return Err(SchemaError::NoSteps(self.name));
        }

        check_steps(&self.steps)?;

        Ok(FormSchema {
            name: self.name,
            version: self.version,
            steps: self.steps,
        })
    }
}

fn check_steps(steps: &[StepSchema]) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for (i, step) in steps.iter().enumerate() {
        let step_index = i + 1;
        if step.fields.is_empty() {
            return Err(SchemaError::EmptyStep { step: step_index });
        }
        for field in &step.fields {
            if field.id.trim().is_empty() {
                return Err(SchemaError::EmptyFieldId { step: step_index });
            }
            if !seen.insert(field.id.as_str()) {
                return Err(SchemaError::DuplicateField(field.id.clone()));
            }
            check_rules(step, field)?;
        }
    }
    Ok(())
}

fn check_rules(step: &StepSchema, field: &FormField) -> Result<(), SchemaError> {
    for rule in &field.rules {
        match rule.kind() {
            RuleKind::CrossField { field: referenced, .. } => {
                if referenced == &field.id || step.get(referenced).is_none() {
                    return Err(SchemaError::UnknownReference {
                        field: field.id.clone(),
                        referenced: referenced.clone(),
                    });
                }
            }
            RuleKind::Range { min, max } => {
                if min.is_some_and(f64::is_nan) || max.is_some_and(f64::is_nan) {
                    return Err(SchemaError::invalid_range(&field.id, "bound is NaN"));
                }
                if let (Some(min), Some(max)) = (min, max) {
                    if min > max {
                        return Err(SchemaError::invalid_range(
                            &field.id,
                            format!("minimum {} exceeds maximum {}", min, max),
                        ));
                    }
                }
            }
            _ => {}
        }
    }
    Ok(())
}
