// Validation diagnostics for veritype schemas
//
// Validation never aborts: every check appends a ValidationError to a
// ValidationResult, and callers inspect the accumulated result. Fatal
// conditions (malformed payloads, compile failures) live in
// crate::internal::error instead.

use std::fmt;

use serde_json::Value;

use crate::internal::error::Error;

/// The specific kind of a validation error. The `Display` form is the
/// stable snake_case tag used in rendered error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required schema has no value set.
    Required,
    /// A value fell below a registered minimum bound.
    MinBound,
    /// A value exceeded a registered maximum bound.
    MaxBound,
    /// A string was shorter than its minimum length.
    MinLength,
    /// A string was longer than its maximum length.
    MaxLength,
    /// An array held fewer items than its minimum.
    MinItems,
    /// An array held more items than its maximum.
    MaxItems,
    /// An array element did not match the element template's shape.
    InvalidElementType,
    /// An array element produced no value after a successful assignment.
    MissingElementValue,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ValidationErrorKind::Required => "required",
            ValidationErrorKind::MinBound => "min",
            ValidationErrorKind::MaxBound => "max",
            ValidationErrorKind::MinLength => "min_length",
            ValidationErrorKind::MaxLength => "max_length",
            ValidationErrorKind::MinItems => "min_items",
            ValidationErrorKind::MaxItems => "max_items",
            ValidationErrorKind::InvalidElementType => "invalid_element_type",
            ValidationErrorKind::MissingElementValue => "missing_element_value",
        };
        f.write_str(tag)
    }
}

/// A single validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// The kind of constraint that failed.
    pub kind: ValidationErrorKind,
    /// Dot-joined field path where the error occurred. Empty at the root.
    pub field: String,
    /// Human readable message.
    pub message: String,
    /// The expected value or constraint, when meaningful for the kind.
    pub expected: Option<Value>,
    /// The actual value that failed validation.
    pub actual: Option<Value>,
}

impl ValidationError {
    /// Creates an error with no expected/actual context.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: String::new(),
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Attaches the expected constraint and the offending value.
    pub fn with_values(mut self, expected: Value, actual: Value) -> Self {
        self.expected = Some(expected);
        self.actual = Some(actual);
        self
    }

    fn render(&self) -> String {
        if self.field.is_empty() {
            format!("[{}] {}", self.kind, self.message)
        } else {
            format!("{}: [{}] {}", self.field, self.kind, self.message)
        }
    }
}

/// Ordered collection of validation errors. Empty means valid. Insertion
/// order equals discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    /// The accumulated errors, in discovery order.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates an empty (valid) result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an error to the result.
    pub fn add_error(&mut self, err: ValidationError) {
        self.errors.push(err);
    }

    /// Returns true if any error has been recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Merges another result's errors into this one, preserving order.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Converts the result into a single descriptive error, or `None` when
    /// the result is clean.
    ///
    /// The rendered text is a stable contract:
    /// `validation failed: <field>: [<kind>] <message>; ...`
    pub fn to_error(&self) -> Option<Error> {
        if !self.has_errors() {
            return None;
        }

        let joined = self
            .errors
            .iter()
            .map(ValidationError::render)
            .collect::<Vec<_>>()
            .join("; ");

        Some(Error::Validation(joined))
    }
}
