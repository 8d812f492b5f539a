// Array schema
//
// Wraps an element schema template and validates cardinality plus
// per-element delegation. The template itself is never mutated: every
// element is assigned to and validated against a fresh clone, so one
// element's value can never leak into another's check.

use serde_json::value::RawValue;
use serde_json::Value;

use crate::internal::error::{Error, Result};
use crate::jsonschema::JsonSchema;
use crate::schema::errors::{ValidationError, ValidationErrorKind, ValidationResult};
use crate::schema::Schema;

/// Schema for homogeneous arrays with item-count bounds.
///
/// Element values are stored loosely typed; the element template decides
/// their shape when they cross the boundary.
pub struct ArraySchema {
    template: Box<dyn Schema>,
    min_items: Option<usize>,
    max_items: Option<usize>,
    value: Option<Vec<Value>>,
    // Elements refused at assignment or element decode. They are not part
    // of the stored sequence; their records surface through validate().
    // Indices refer to positions in the input that produced them.
    rejected: Vec<ValidationError>,
    description: Option<String>,
    optional: bool,
}

impl ArraySchema {
    /// Creates a new array schema validating every element against
    /// `template`.
    pub fn new(template: impl Schema + 'static) -> Self {
        Self {
            template: Box::new(template),
            min_items: None,
            max_items: None,
            value: None,
            rejected: Vec::new(),
            description: None,
            optional: false,
        }
    }

    /// Registers an inclusive minimum item count.
    pub fn min_items(mut self, min: usize) -> Self {
        self.min_items = Some(min);
        self
    }

    /// Registers an inclusive maximum item count.
    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
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

    /// Assigns the array's elements. Each input value is pushed through a
    /// fresh clone of the element template; values the template refuses are
    /// recorded as invalid-element errors and dropped from storage, so the
    /// stored array may be shorter than the input.
    pub fn set_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.rejected.clear();
        let mut stored = Vec::new();

        for (i, value) in values.into_iter().enumerate() {
            let mut elem = self.template.clone_schema();
            if let Err(err) = elem.set_raw_value(value.into()) {
                self.rejected.push(ValidationError::new(
                    ValidationErrorKind::InvalidElementType,
                    format!("element {i}: {err}"),
                ));
                continue;
            }

            match elem.raw_value() {
                Some(value) => stored.push(value),
                None => self.rejected.push(ValidationError::new(
                    ValidationErrorKind::MissingElementValue,
                    format!("element {i}: missing value"),
                )),
            }
        }

        self.value = Some(stored);
        self
    }

    /// Returns the stored elements, or `None` when unset.
    pub fn values(&self) -> Option<&[Value]> {
        self.value.as_deref()
    }
}

impl Clone for ArraySchema {
    fn clone(&self) -> Self {
        Self {
            template: self.template.clone_schema(),
            min_items: self.min_items,
            max_items: self.max_items,
            value: self.value.clone(),
            rejected: self.rejected.clone(),
            description: self.description.clone(),
            optional: self.optional,
        }
    }
}

impl Schema for ArraySchema {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        let Some(values) = &self.value else {
            if !self.optional {
                result.add_error(ValidationError::new(
                    ValidationErrorKind::Required,
                    "array is required",
                ));
            }
            return result;
        };

        // Count bounds run against the stored (post-drop) length.
        if let Some(min) = self.min_items {
            if values.len() < min {
                result.add_error(
                    ValidationError::new(
                        ValidationErrorKind::MinItems,
                        format!("minimum {min} items required"),
                    )
                    .with_values(min.into(), values.len().into()),
                );
            }
        }

        if let Some(max) = self.max_items {
            if values.len() > max {
                result.add_error(
                    ValidationError::new(
                        ValidationErrorKind::MaxItems,
                        format!("maximum {max} items allowed"),
                    )
                    .with_values(max.into(), values.len().into()),
                );
            }
        }

        for err in &self.rejected {
            result.add_error(err.clone());
        }

        // Every stored element gets inspected; a bad element never aborts
        // the loop.
        for (i, value) in values.iter().enumerate() {
            let mut elem = self.template.clone_schema();
            if let Err(err) = elem.set_raw_value(value.clone()) {
                result.add_error(ValidationError::new(
                    ValidationErrorKind::InvalidElementType,
                    format!("element {i}: {err}"),
                ));
                continue;
            }

            for mut err in elem.validate().errors {
                err.message = format!("element {i}: {}", err.message);
                result.add_error(err);
            }
        }

        result
    }

    fn encode(&self) -> Result<Vec<u8>> {
        match &self.value {
            Some(values) => serde_json::to_vec(values)
                .map_err(|e| Error::InvalidFormat(format!("could not encode array: {e}"))),
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

        let raw_elements: Vec<&RawValue> = serde_json::from_slice(data)
            .map_err(|e| Error::InvalidFormat(format!("invalid array format: {e}")))?;

        self.rejected.clear();
        let mut stored = Vec::with_capacity(raw_elements.len());

        for (i, raw) in raw_elements.iter().enumerate() {
            let mut elem = self.template.clone_schema();
            if let Err(err) = elem.decode(raw.get().as_bytes()) {
                // Non-fatal at the element level: record and move on.
                self.rejected.push(ValidationError::new(
                    ValidationErrorKind::InvalidElementType,
                    format!("element {i}: {err}"),
                ));
                continue;
            }

            match elem.raw_value() {
                Some(value) => stored.push(value),
                None => self.rejected.push(ValidationError::new(
                    ValidationErrorKind::MissingElementValue,
                    format!("element {i}: missing value"),
                )),
            }
        }

        self.value = Some(stored);

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
        let items = self.template.compile()?;

        let mut node = JsonSchema::of_type("array");
        node.items = Some(Box::new(items));
        node.min_items = self.min_items;
        node.max_items = self.max_items;
        if let Some(desc) = &self.description {
            node.description = desc.clone();
        }
        Ok(node)
    }

    fn raw_value(&self) -> Option<Value> {
        self.value.as_ref().map(|v| Value::Array(v.clone()))
    }

    fn set_raw_value(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Array(values) => {
                // A reassignment replaces the whole value; records from the
                // previous one must not outlive it.
                self.rejected.clear();
                self.value = Some(values);
                Ok(())
            }
            other => Err(Error::TypeMismatch(format!(
                "expected array value, got {other}"
            ))),
        }
    }
}
