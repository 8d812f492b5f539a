// JSON-Schema document tree
//
// The compiled, static description a schema declaration produces:
// types, bounds, and required lists, independent of any particular value.
// Fields are omitted from the serialized document when empty or absent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A node in a JSON-Schema document. The root node is an `"object"` with
/// properties and a required list; leaf nodes carry a primitive type tag
/// plus the bounds their schema declares.
///
/// Properties use a sorted map so rendered documents are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Document title. Only meaningful on the root node.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub title: String,

    /// Human readable description.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,

    /// The node's type tag: "object", "string", "number", "boolean",
    /// or "array".
    #[serde(rename = "type")]
    pub schema_type: String,

    /// Named child nodes of an object node.
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub properties: BTreeMap<String, JsonSchema>,

    /// Names of the object node's required properties.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub required: Vec<String>,

    /// Minimum string length, inclusive.
    #[serde(
        rename = "minLength",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub min_length: Option<usize>,

    /// Maximum string length, inclusive.
    #[serde(
        rename = "maxLength",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub max_length: Option<usize>,

    /// Element schema of an array node.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub items: Option<Box<JsonSchema>>,

    /// Minimum array item count, inclusive.
    #[serde(rename = "minItems", skip_serializing_if = "Option::is_none", default)]
    pub min_items: Option<usize>,

    /// Maximum array item count, inclusive.
    #[serde(rename = "maxItems", skip_serializing_if = "Option::is_none", default)]
    pub max_items: Option<usize>,
}

impl JsonSchema {
    /// Creates a node with the given type tag and nothing else.
    pub fn of_type(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: schema_type.into(),
            ..Self::default()
        }
    }

    /// Creates an empty `"object"` node ready to receive properties.
    pub fn object() -> Self {
        Self::of_type("object")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_fields_are_omitted() {
        let node = JsonSchema::of_type("string");
        let rendered = serde_json::to_value(&node).unwrap();
        assert_eq!(rendered, json!({"type": "string"}));
    }

    #[test]
    fn bounds_render_with_wire_names() {
        let mut node = JsonSchema::of_type("string");
        node.min_length = Some(0);
        node.max_length = Some(10);

        let rendered = serde_json::to_value(&node).unwrap();
        assert_eq!(
            rendered,
            json!({"type": "string", "minLength": 0, "maxLength": 10})
        );
    }

    #[test]
    fn properties_render_sorted() {
        let mut root = JsonSchema::object();
        root.properties
            .insert("zebra".into(), JsonSchema::of_type("string"));
        root.properties
            .insert("alpha".into(), JsonSchema::of_type("number"));

        let rendered = serde_json::to_string(&root).unwrap();
        assert!(rendered.find("alpha").unwrap() < rendered.find("zebra").unwrap());
    }
}
