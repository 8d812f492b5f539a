// Boolean schema
//
// A degenerate, presence-only schema: no magnitude constraints exist for
// booleans, so validation only checks presence against optionality.

use serde_json::Value;

use crate::internal::error::{Error, Result};
use crate::jsonschema::JsonSchema;
use crate::schema::errors::{ValidationError, ValidationErrorKind, ValidationResult};
use crate::schema::Schema;

/// Schema for boolean values.
#[derive(Debug, Clone, Default)]
pub struct BoolSchema {
    value: Option<bool>,
    description: Option<String>,
    optional: bool,
}

impl BoolSchema {
    /// Creates a new, unset, required boolean schema.
    pub fn new() -> Self {
        Self::default()
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
    pub fn set(mut self, value: bool) -> Self {
        self.value = Some(value);
        self
    }

    /// Re-assigns the current value in place.
    pub fn set_value(&mut self, value: bool) {
        self.value = Some(value);
    }

    /// Returns the current value, or `None` when unset.
    pub fn value(&self) -> Option<bool> {
        self.value
    }
}

impl Schema for BoolSchema {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        if self.value.is_none() && !self.optional {
            result.add_error(ValidationError::new(
                ValidationErrorKind::Required,
                "value has not been set",
            ));
        }

        result
    }

    fn encode(&self) -> Result<Vec<u8>> {
        match self.value {
            Some(value) => serde_json::to_vec(&value)
                .map_err(|e| Error::InvalidFormat(format!("could not encode value: {e}"))),
            None if self.optional => Ok(b"null".to_vec()),
            None => Err(Error::RequiredField),
        }
    }

    fn decode(&mut self, data: &[u8]) -> Result<()> {
        if data == b"null" || data.is_empty() {
            if !self.optional {
                return Err(Error::RequiredField);
            }
            self.value = None;
            return Ok(());
        }

        let value: bool = serde_json::from_slice(data)
            .map_err(|e| Error::InvalidFormat(format!("invalid boolean value: {e}")))?;
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
        let mut node = JsonSchema::of_type("boolean");
        if let Some(desc) = &self.description {
            node.description = desc.clone();
        }
        Ok(node)
    }

    fn raw_value(&self) -> Option<Value> {
        self.value.map(Value::Bool)
    }

    fn set_raw_value(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Bool(b) => {
                self.value = Some(b);
                Ok(())
            }
            other => Err(Error::TypeMismatch(format!(
                "expected boolean value, got {other}"
            ))),
        }
    }
}
