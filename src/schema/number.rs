// Generic constrained-value schema
//
// NumberSchema is the single engine behind every ordered scalar type.
// Concrete integer/float/byte/char schemas in numeric.rs are mechanical
// instantiations of it.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::internal::error::{Error, Result};
use crate::jsonschema::JsonSchema;
use crate::schema::errors::{ValidationError, ValidationErrorKind, ValidationResult};
use crate::schema::{Schema, ValidationOptions};

/// The capability a scalar needs to participate in a `NumberSchema`:
/// ordering for bound checks, JSON serialization for the wire and the
/// type-erased boundary, `Display` for default messages.
pub trait Ordered: PartialOrd + Clone + Display + Serialize + DeserializeOwned {}

impl<T> Ordered for T where T: PartialOrd + Clone + Display + Serialize + DeserializeOwned {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoundKind {
    Min,
    Max,
}

/// A registered bound check: the declarative record of a `min`/`max` call.
///
/// Checks are replayed against the current value on every `validate` call.
/// Repeated registrations accumulate; each is enforced independently.
#[derive(Debug, Clone)]
struct BoundCheck<T> {
    kind: BoundKind,
    bound: T,
    message: String,
}

/// Schema for any ordered scalar value, with inclusive min/max bounds.
#[derive(Debug, Clone, Default)]
pub struct NumberSchema<T: Ordered> {
    checks: Vec<BoundCheck<T>>,
    value: Option<T>,
    description: Option<String>,
    optional: bool,
}

impl<T: Ordered> NumberSchema<T> {
    /// Creates a new, unset, required schema with no constraints.
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            value: None,
            description: None,
            optional: false,
        }
    }

    /// Registers an inclusive minimum bound: values below `bound` fail.
    pub fn min(self, bound: T) -> Self {
        let message = format!("must be at least {bound}");
        self.push_check(BoundKind::Min, bound, message, None)
    }

    /// Like [`min`](Self::min), with options (e.g. a custom message).
    pub fn min_with(self, bound: T, opts: ValidationOptions) -> Self {
        let message = format!("must be at least {bound}");
        self.push_check(BoundKind::Min, bound, message, opts.message)
    }

    /// Registers an inclusive maximum bound: values above `bound` fail.
    pub fn max(self, bound: T) -> Self {
        let message = format!("must not exceed: {bound}");
        self.push_check(BoundKind::Max, bound, message, None)
    }

    /// Like [`max`](Self::max), with options (e.g. a custom message).
    pub fn max_with(self, bound: T, opts: ValidationOptions) -> Self {
        let message = format!("must not exceed: {bound}");
        self.push_check(BoundKind::Max, bound, message, opts.message)
    }

    fn push_check(
        mut self,
        kind: BoundKind,
        bound: T,
        default_message: String,
        custom_message: Option<String>,
    ) -> Self {
        self.checks.push(BoundCheck {
            kind,
            bound,
            message: custom_message.unwrap_or(default_message),
        });
        self
    }

    /// Marks the schema as optional: an absent value is not an error.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Attaches a description, carried into the compiled JSON-Schema node.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Sets the current value (fluent form).
    pub fn set(mut self, value: T) -> Self {
        self.value = Some(value);
        self
    }

    /// Re-assigns the current value in place.
    pub fn set_value(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Returns the current value, or `None` when unset.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T: Ordered + 'static> Schema for NumberSchema<T> {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        let Some(value) = &self.value else {
            // Unset short-circuits all bound evaluation: either the absence
            // itself is the single error, or there is nothing to report.
            if !self.optional {
                result.add_error(ValidationError::new(
                    ValidationErrorKind::Required,
                    "value has not been set",
                ));
            }
            return result;
        };

        for check in &self.checks {
            let (failed, kind) = match check.kind {
                BoundKind::Min => (*value < check.bound, ValidationErrorKind::MinBound),
                BoundKind::Max => (*value > check.bound, ValidationErrorKind::MaxBound),
            };

            if failed {
                result.add_error(
                    ValidationError::new(kind, check.message.clone()).with_values(
                        to_json(&check.bound),
                        to_json(value),
                    ),
                );
            }
        }

        result
    }

    fn encode(&self) -> Result<Vec<u8>> {
        match &self.value {
            Some(value) => serde_json::to_vec(value)
                .map_err(|e| Error::InvalidFormat(format!("could not encode value: {e}"))),
            None if self.optional => Ok(b"null".to_vec()),
            None => Err(Error::RequiredField),
        }
    }

    fn decode(&mut self, data: &[u8]) -> Result<()> {
        if data == b"null" {
            if !self.optional {
                return Err(Error::RequiredField);
            }
            self.value = None;
            return Ok(());
        }

        let value: T = serde_json::from_slice(data)
            .map_err(|e| Error::InvalidFormat(format!("invalid numeric value: {e}")))?;
        self.value = Some(value);

        match self.validate().to_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn clone_schema(&self) -> Box<dyn Schema> {
        Box::new(self.clone())
    }

    fn compile(&self) -> Result<JsonSchema> {
        // Numeric bounds are deliberately not emitted into the document.
        let mut node = JsonSchema::of_type("number");
        if let Some(desc) = &self.description {
            node.description = desc.clone();
        }
        Ok(node)
    }

    fn raw_value(&self) -> Option<Value> {
        self.value.as_ref().map(to_json)
    }

    fn set_raw_value(&mut self, value: Value) -> Result<()> {
        let typed: T = serde_json::from_value(value)
            .map_err(|e| Error::TypeMismatch(format!("expected numeric value: {e}")))?;
        self.value = Some(typed);
        Ok(())
    }
}

fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}
