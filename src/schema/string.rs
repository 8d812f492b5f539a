// String schema with length bounds
//
// Same shape as the constrained-value schema, specialized to character
// counts instead of value ordering.

use serde_json::Value;

use crate::internal::error::{Error, Result};
use crate::jsonschema::JsonSchema;
use crate::schema::errors::{ValidationError, ValidationErrorKind, ValidationResult};
use crate::schema::{Schema, ValidationOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LengthKind {
    Min,
    Max,
}

/// A registered length check, replayed on every `validate` call.
#[derive(Debug, Clone)]
struct LengthCheck {
    kind: LengthKind,
    bound: usize,
    message: String,
}

/// Schema for string values with inclusive character-count bounds.
///
/// Lengths count characters, not bytes, which is what the default error
/// messages promise.
#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    checks: Vec<LengthCheck>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    value: Option<String>,
    description: Option<String>,
    optional: bool,
}

impl StringSchema {
    /// Creates a new, unset, required string schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an inclusive minimum length.
    pub fn min(self, length: usize) -> Self {
        let message = format!("must be at least {length} characters long");
        self.push_check(LengthKind::Min, length, message, None)
    }

    /// Like [`min`](Self::min), with options (e.g. a custom message).
    pub fn min_with(self, length: usize, opts: ValidationOptions) -> Self {
        let message = format!("must be at least {length} characters long");
        self.push_check(LengthKind::Min, length, message, opts.message)
    }

    /// Registers an inclusive maximum length.
    pub fn max(self, length: usize) -> Self {
        let message = format!("must be at most {length} characters long");
        self.push_check(LengthKind::Max, length, message, None)
    }

    /// Like [`max`](Self::max), with options (e.g. a custom message).
    pub fn max_with(self, length: usize, opts: ValidationOptions) -> Self {
        let message = format!("must be at most {length} characters long");
        self.push_check(LengthKind::Max, length, message, opts.message)
    }

    fn push_check(
        mut self,
        kind: LengthKind,
        bound: usize,
        default_message: String,
        custom_message: Option<String>,
    ) -> Self {
        // The declared bound is what the compiler emits; the latest call
        // wins there. Checks themselves accumulate.
        match kind {
            LengthKind::Min => self.min_length = Some(bound),
            LengthKind::Max => self.max_length = Some(bound),
        }
        self.checks.push(LengthCheck {
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
    pub fn set(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Re-assigns the current value in place.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    /// Returns the current value, or `None` when unset.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl Schema for StringSchema {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        let Some(value) = &self.value else {
            if !self.optional {
                result.add_error(ValidationError::new(
                    ValidationErrorKind::Required,
                    "value has not been set",
                ));
            }
            return result;
        };

        let length = value.chars().count();
        for check in &self.checks {
            let (failed, kind) = match check.kind {
                LengthKind::Min => (length < check.bound, ValidationErrorKind::MinLength),
                LengthKind::Max => (length > check.bound, ValidationErrorKind::MaxLength),
            };

            if failed {
                result.add_error(
                    ValidationError::new(kind, check.message.clone())
                        .with_values(check.bound.into(), length.into()),
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

        let value: String = serde_json::from_slice(data)
            .map_err(|e| Error::InvalidFormat(format!("invalid string value: {e}")))?;
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
        let mut node = JsonSchema::of_type("string");
        if let Some(desc) = &self.description {
            node.description = desc.clone();
        }
        node.min_length = self.min_length;
        node.max_length = self.max_length;
        Ok(node)
    }

    fn raw_value(&self) -> Option<Value> {
        self.value.as_ref().map(|v| Value::String(v.clone()))
    }

    fn set_raw_value(&mut self, value: Value) -> Result<()> {
        match value {
            Value::String(s) => {
                self.value = Some(s);
                Ok(())
            }
            other => Err(Error::TypeMismatch(format!(
                "expected string value, got {other}"
            ))),
        }
    }
}
