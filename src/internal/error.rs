use thiserror::Error;

/// Unified error type for fatal veritype operations.
///
/// Validation diagnostics are not errors in this sense: `validate` always
/// succeeds and returns a `ValidationResult`. This enum covers the calls
/// that abort outright (decode, compile, encoding a required-but-unset
/// value).
#[derive(Error, Debug)]
pub enum Error {
    /// A required schema has no value to encode, or a `null` payload was
    /// decoded into a required schema.
    #[error("required field has no value")]
    RequiredField,

    /// The input payload is malformed for the target shape.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// A value crossed the type-erased boundary with the wrong shape.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// A decoded value failed its schema's validation. Carries the rendered
    /// diagnostic text from the underlying `ValidationResult`.
    #[error("validation failed: {0}")]
    Validation(String),

    /// JSON-Schema compilation failed.
    #[error("schema compile error: {0}")]
    Compile(String),

    /// A declared schema slot had no schema instance bound to it at
    /// compile time.
    #[error("no schema bound to field: {0}")]
    MissingSchema(String),

    /// A plain (non-schema) member was bound to a JSON tag at compile time.
    #[error("unsupported field shape: {0}")]
    UnsupportedField(String),
}

/// A specialized `Result` type for veritype operations.
pub type Result<T> = std::result::Result<T, Error>;
