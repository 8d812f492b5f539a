// veritype library entry point
//
// Fluent schema definition and validation for JSON data: build typed schema
// nodes, attach constraints, bind them to payloads, deep-validate whole
// object graphs, and compile declarations to JSON-Schema documents.

pub mod graph;
pub mod internal;
pub mod jsonschema;
pub mod schema;

// Flat re-exports of the public surface
pub use graph::{
    compile_node, compile_schema, ensure, marshal, parse, CompileOptions, Field, FieldMut,
    FieldNode, FieldNodeMut, Fields,
};
pub use internal::error::{Error, Result};
pub use jsonschema::JsonSchema;
pub use schema::numeric::{
    ByteSchema, CharSchema, Float32Schema, Float64Schema, Int16Schema, Int32Schema, Int64Schema,
    Int8Schema, IntSchema, Uint16Schema, Uint32Schema, Uint64Schema, Uint8Schema, UintSchema,
};
pub use schema::{
    ArraySchema, BoolSchema, NumberSchema, Ordered, Schema, StringSchema, ValidationError,
    ValidationErrorKind, ValidationOptions, ValidationResult,
};
