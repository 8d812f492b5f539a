// JSON-Schema compiler
//
// Walks a declaration graph (values are irrelevant) and emits a JSON-Schema
// document tree. Compilation is all-or-nothing: the first unsupported or
// unbound tagged member aborts with no partial document.

use tracing::trace;

use crate::graph::{FieldNode, Fields};
use crate::internal::error::{Error, Result};
use crate::jsonschema::JsonSchema;

/// Root document metadata for [`compile_schema`].
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Title of the produced document.
    pub title: String,
    /// Description of the produced document.
    pub description: String,
}

impl CompileOptions {
    /// Creates options with a title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Compiles a declaration graph into a pretty-printed JSON-Schema document.
///
/// Untagged members are skipped entirely. Tagged leaf schemas become
/// property nodes and, unless optional, entries in the parent's required
/// list. Tagged nested containers compile to `"object"` nodes and are
/// always marked required. A tagged unbound slot or plain member is a
/// fatal error.
pub fn compile_schema(root: &dyn Fields, opts: &CompileOptions) -> Result<Vec<u8>> {
    let mut doc = JsonSchema::object();
    doc.title = opts.title.clone();
    doc.description = opts.description.clone();

    compile_fields(root, &mut doc)?;

    serde_json::to_vec_pretty(&doc)
        .map_err(|e| Error::Compile(format!("could not render document: {e}")))
}

/// Compiles a declaration graph into a document node instead of rendered
/// bytes. The root node carries no title or description.
pub fn compile_node(root: &dyn Fields) -> Result<JsonSchema> {
    let mut doc = JsonSchema::object();
    compile_fields(root, &mut doc)?;
    Ok(doc)
}

fn compile_fields(container: &dyn Fields, doc: &mut JsonSchema) -> Result<()> {
    for field in container.fields() {
        let Some(tag) = field.json_tag else {
            continue;
        };

        match field.node {
            FieldNode::Schema(schema) => {
                trace!(field = field.name, tag, "compiling leaf schema");
                let node = schema.compile()?;
                if !schema.is_optional() {
                    doc.required.push(tag.to_string());
                }
                doc.properties.insert(tag.to_string(), node);
            }
            FieldNode::Object(nested) => {
                trace!(field = field.name, tag, "compiling nested container");
                let mut node = JsonSchema::object();
                compile_fields(nested, &mut node)?;

                // Optionality of nested objects is not modeled; they are
                // always required.
                doc.required.push(tag.to_string());
                doc.properties.insert(tag.to_string(), node);
            }
            FieldNode::Unset => {
                return Err(Error::MissingSchema(field.name.to_string()));
            }
            FieldNode::Opaque => {
                return Err(Error::UnsupportedField(field.name.to_string()));
            }
        }
    }

    Ok(())
}
