// Schema module for veritype
//
// This module provides the fluent schema types and the capability contract
// they all satisfy. It includes:
//
// 1. The `Schema` trait every variant implements
// 2. The generic constrained-value schema for ordered scalars
// 3. String, boolean, and array composite schemas
// 4. Validation error and result types

// Re-export public types
pub use self::array::ArraySchema;
pub use self::boolean::BoolSchema;
pub use self::errors::{ValidationError, ValidationErrorKind, ValidationResult};
pub use self::number::{NumberSchema, Ordered};
pub use self::string::StringSchema;

// Sub-modules
pub mod array;
pub mod boolean;
pub mod errors;
pub mod number;
pub mod numeric;
pub mod string;

use serde_json::Value;

use crate::internal::error::Result;
use crate::jsonschema::JsonSchema;

/// Options accepted by constraint-registration methods.
#[derive(Debug, Clone, Default)]
pub struct ValidationOptions {
    /// Overrides the default message for the constraint's error.
    pub message: Option<String>,
}

impl ValidationOptions {
    /// Creates options carrying a custom error message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// The core capability contract for veritype.
///
/// Every schema variant can validate its current value, move values across
/// the JSON wire, describe itself as a JSON-Schema node, and fork an
/// independent copy of itself.
pub trait Schema {
    /// Replays every registered constraint against the current value and
    /// returns a fresh result. Pure: repeated calls with no intervening
    /// mutation yield equal results.
    fn validate(&self) -> ValidationResult;

    /// Serializes the current value to JSON bytes. An absent value encodes
    /// to `null` when the schema is optional and fails otherwise.
    fn encode(&self) -> Result<Vec<u8>>;

    /// Parses a JSON payload into the schema. `null` clears an optional
    /// schema and fails a required one; a malformed payload fails with
    /// `InvalidFormat`; a stored value is immediately validated and any
    /// diagnostic surfaces as a `Validation` error.
    fn decode(&mut self, data: &[u8]) -> Result<()>;

    /// Denotes whether the schema's value may be absent.
    fn is_optional(&self) -> bool;

    /// Creates a deep, independent copy sharing no mutable state with the
    /// original.
    fn clone_schema(&self) -> Box<dyn Schema>;

    /// Emits this schema's JSON-Schema node (type tag, description, and the
    /// bounds the node declares).
    fn compile(&self) -> Result<JsonSchema>;

    /// Reads the current value across the type-erased boundary. `None`
    /// when unset. Used by composite schemas; not part of the typed API.
    fn raw_value(&self) -> Option<Value>;

    /// Assigns a value across the type-erased boundary, failing with
    /// `TypeMismatch` when the value's shape does not fit the schema.
    fn set_raw_value(&mut self, value: Value) -> Result<()>;
}
