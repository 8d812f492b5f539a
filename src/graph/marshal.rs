// Object-level JSON encode/decode over the declaration graph
//
// parse populates a container's schema members from a JSON object and then
// runs the full ensure traversal; marshal validates first and then emits
// the object from the members' own encoders.

use std::collections::HashMap;

use serde_json::value::RawValue;
use tracing::{debug, trace};

use crate::graph::{ensure, FieldNode, FieldNodeMut, Fields};
use crate::internal::error::{Error, Result};
use crate::schema::ValidationResult;

/// Decodes a JSON object into `root`'s tagged members, then deep-validates
/// the whole graph.
///
/// Members absent from the payload stay unset (the ensure traversal flags
/// them when required). A present member that fails to decode is fatal for
/// the call. The returned result carries every validation diagnostic the
/// traversal discovered.
pub fn parse(data: &[u8], root: &mut dyn Fields) -> Result<ValidationResult> {
    parse_fields(data, root)?;
    debug!("parsed object graph, running deep validation");
    Ok(ensure(&*root))
}

fn parse_fields(data: &[u8], container: &mut dyn Fields) -> Result<()> {
    let members: HashMap<String, &RawValue> = serde_json::from_slice(data)
        .map_err(|e| Error::InvalidFormat(format!("invalid object payload: {e}")))?;

    for field in container.fields_mut() {
        let Some(tag) = field.json_tag else {
            continue;
        };
        let Some(raw) = members.get(tag) else {
            continue;
        };

        match field.node {
            FieldNodeMut::Schema(schema) => {
                trace!(field = field.name, tag, "decoding member");
                match schema.decode(raw.get().as_bytes()) {
                    // The value was stored; the ensure pass re-derives the
                    // diagnostics with their full field paths.
                    Err(Error::Validation(_)) => {}
                    other => other?,
                }
            }
            FieldNodeMut::Object(nested) => {
                // A null nested object is a no-op: the members stay unset
                // and the ensure traversal judges them.
                if raw.get() == "null" {
                    continue;
                }
                trace!(field = field.name, tag, "descending into nested member");
                parse_fields(raw.get().as_bytes(), nested)?;
            }
            FieldNodeMut::Opaque | FieldNodeMut::Unset => {}
        }
    }

    Ok(())
}

/// Validates the whole graph and, when clean, encodes the tagged members
/// into a JSON object.
///
/// Any validation error aborts with the rendered diagnostic; nothing is
/// produced for an invalid graph.
pub fn marshal(root: &dyn Fields) -> Result<Vec<u8>> {
    let result = ensure(root);
    if let Some(err) = result.to_error() {
        return Err(err);
    }

    let object = marshal_fields(root)?;
    serde_json::to_vec(&object)
        .map_err(|e| Error::InvalidFormat(format!("could not encode object: {e}")))
}

fn marshal_fields(container: &dyn Fields) -> Result<serde_json::Map<String, serde_json::Value>> {
    let mut object = serde_json::Map::new();

    for field in container.fields() {
        let Some(tag) = field.json_tag else {
            continue;
        };

        match field.node {
            FieldNode::Schema(schema) => {
                let bytes = schema.encode()?;
                let value = serde_json::from_slice(&bytes)
                    .map_err(|e| Error::InvalidFormat(format!("could not encode member: {e}")))?;
                object.insert(tag.to_string(), value);
            }
            FieldNode::Object(nested) => {
                let value = marshal_fields(nested)?;
                object.insert(tag.to_string(), serde_json::Value::Object(value));
            }
            FieldNode::Opaque | FieldNode::Unset => {}
        }
    }

    Ok(object)
}
