// Recursive ensure engine
//
// Walks a declaration graph depth-first, validates every embedded schema,
// and stitches a dotted field path onto every error. Encode/decode are
// never invoked for members a payload omits, so this walk is the only way
// to fully validate a container, unset members included.

use tracing::trace;

use crate::graph::{FieldNode, Fields};
use crate::schema::ValidationResult;

/// Validates every schema member reachable from `root`, returning the
/// aggregated, path-qualified result.
///
/// Unbound (`Unset`) members terminate their branch silently; plain
/// (`Opaque`) members are skipped. The walk is not cycle-safe: a
/// self-referential graph recurses without bound.
pub fn ensure(root: &dyn Fields) -> ValidationResult {
    let mut result = ValidationResult::new();
    ensure_recursive(root, "", &mut result);
    result
}

fn ensure_recursive(container: &dyn Fields, path: &str, result: &mut ValidationResult) {
    for field in container.fields() {
        let field_path = if path.is_empty() {
            field.name.to_string()
        } else {
            format!("{path}.{}", field.name)
        };

        match field.node {
            FieldNode::Schema(schema) => {
                let field_result = schema.validate();
                trace!(
                    field = %field_path,
                    errors = field_result.errors.len(),
                    "validated schema member"
                );

                for mut err in field_result.errors {
                    err.field = if err.field.is_empty() {
                        field_path.clone()
                    } else {
                        format!("{field_path}.{}", err.field)
                    };
                    result.add_error(err);
                }
            }
            FieldNode::Object(nested) => {
                trace!(field = %field_path, "descending into nested container");
                ensure_recursive(nested, &field_path, result);
            }
            FieldNode::Opaque | FieldNode::Unset => {}
        }
    }
}
