// End-to-end tests for the JSON-Schema compiler

use serde_json::Value;
use veritype::{
    compile_schema, ArraySchema, CompileOptions, Error, Field, FieldMut, FieldNode, FieldNodeMut,
    Fields, Schema, StringSchema,
};

struct Basic {
    name: StringSchema,
}

impl Fields for Basic {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::schema("name", "name", &self.name)]
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        vec![FieldMut::schema("name", "name", &mut self.name)]
    }
}

fn compile_to_value(root: &dyn Fields, title: &str, description: &str) -> Value {
    let bytes = compile_schema(root, &CompileOptions::new(title, description)).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn compiles_a_basic_string_schema() {
    let schema = Basic {
        name: StringSchema::new().description("The user's name"),
    };

    let doc = compile_to_value(&schema, "basic", "A basic schema");

    assert_eq!(doc["title"], "basic");
    assert_eq!(doc["description"], "A basic schema");
    assert_eq!(doc["type"], "object");
    assert_eq!(doc["properties"]["name"]["type"], "string");
    assert_eq!(doc["properties"]["name"]["description"], "The user's name");
    assert_eq!(doc["required"][0], "name");
}

struct Nested {
    nested: Basic,
}

impl Fields for Nested {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::object("nested", "nested", &self.nested)]
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        vec![FieldMut::object("nested", "nested", &mut self.nested)]
    }
}

#[test]
fn compiles_a_nested_schema() {
    let schema = Nested {
        nested: Basic {
            name: StringSchema::new().description("The user's name"),
        },
    };

    let doc = compile_to_value(&schema, "basic_nested", "A basic nested schema");

    let nested = &doc["properties"]["nested"];
    assert_eq!(nested["type"], "object");
    assert_eq!(nested["properties"]["name"]["type"], "string");
    assert_eq!(nested["required"][0], "name");

    // Nested objects are always marked required.
    let required = doc["required"].as_array().unwrap();
    assert!(required.contains(&Value::from("nested")));
}

struct Complex {
    required: StringSchema,
    optional: StringSchema,
    with_lengths: StringSchema,
    described: StringSchema,
    untagged: StringSchema,
}

impl Fields for Complex {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::schema("required", "required", &self.required),
            Field::schema("optional", "optional", &self.optional),
            Field::schema("with_lengths", "withLengths", &self.with_lengths),
            Field::schema("described", "described", &self.described),
            Field {
                name: "untagged",
                json_tag: None,
                node: FieldNode::Schema(&self.untagged),
            },
        ]
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        vec![
            FieldMut::schema("required", "required", &mut self.required),
            FieldMut::schema("optional", "optional", &mut self.optional),
            FieldMut::schema("with_lengths", "withLengths", &mut self.with_lengths),
            FieldMut::schema("described", "described", &mut self.described),
            FieldMut {
                name: "untagged",
                json_tag: None,
                node: FieldNodeMut::Schema(&mut self.untagged),
            },
        ]
    }
}

#[test]
fn compiles_a_complex_string_schema() {
    let schema = Complex {
        required: StringSchema::new(),
        optional: StringSchema::new().optional(),
        with_lengths: StringSchema::new().min(5).max(10),
        described: StringSchema::new().description("A field with description"),
        untagged: StringSchema::new(),
    };

    let doc = compile_to_value(&schema, "complex", "A complex schema");
    let properties = doc["properties"].as_object().unwrap();

    assert_eq!(properties["required"]["type"], "string");
    assert_eq!(properties["optional"]["type"], "string");
    assert_eq!(properties["withLengths"]["minLength"], 5);
    assert_eq!(properties["withLengths"]["maxLength"], 10);
    assert_eq!(
        properties["described"]["description"],
        "A field with description"
    );

    // Untagged members never reach the document.
    assert!(!properties.contains_key("untagged"));

    let required = doc["required"].as_array().unwrap();
    assert!(required.contains(&Value::from("required")));
    assert!(required.contains(&Value::from("withLengths")));
    assert!(required.contains(&Value::from("described")));
    assert!(!required.contains(&Value::from("optional")));
}

struct WithUnboundSlot {
    name: Option<StringSchema>,
}

impl Fields for WithUnboundSlot {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field {
            name: "name",
            json_tag: Some("name"),
            node: match &self.name {
                Some(schema) => FieldNode::Schema(schema),
                None => FieldNode::Unset,
            },
        }]
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        vec![FieldMut {
            name: "name",
            json_tag: Some("name"),
            node: match &mut self.name {
                Some(schema) => FieldNodeMut::Schema(schema),
                None => FieldNodeMut::Unset,
            },
        }]
    }
}

#[test]
fn unbound_tagged_slot_aborts_compilation() {
    let schema = WithUnboundSlot { name: None };
    let err = compile_schema(&schema, &CompileOptions::new("nil_fields", "")).unwrap_err();
    assert!(matches!(err, Error::MissingSchema(_)));
    assert!(err.to_string().contains("name"));
}

struct WithPlainMember {
    not_a_schema: String,
}

impl Fields for WithPlainMember {
    fn fields(&self) -> Vec<Field<'_>> {
        let _ = &self.not_a_schema;
        vec![Field {
            name: "not_a_schema",
            json_tag: Some("invalid"),
            node: FieldNode::Opaque,
        }]
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        vec![FieldMut {
            name: "not_a_schema",
            json_tag: Some("invalid"),
            node: FieldNodeMut::Opaque,
        }]
    }
}

#[test]
fn tagged_plain_member_aborts_compilation() {
    let schema = WithPlainMember {
        not_a_schema: "this is not a schema".to_string(),
    };
    let err = compile_schema(&schema, &CompileOptions::new("invalid", "")).unwrap_err();
    assert!(matches!(err, Error::UnsupportedField(_)));
    assert!(err.to_string().contains("unsupported field shape"));
}

struct EdgeCases {
    empty_desc: StringSchema,
    zero_length: StringSchema,
}

impl Fields for EdgeCases {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::schema("empty_desc", "emptyDesc", &self.empty_desc),
            Field::schema("zero_length", "zeroLength", &self.zero_length),
        ]
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        vec![
            FieldMut::schema("empty_desc", "emptyDesc", &mut self.empty_desc),
            FieldMut::schema("zero_length", "zeroLength", &mut self.zero_length),
        ]
    }
}

#[test]
fn empty_description_is_omitted_and_zero_bounds_render() {
    let schema = EdgeCases {
        empty_desc: StringSchema::new().description(""),
        zero_length: StringSchema::new().min(0).max(0),
    };

    let doc = compile_to_value(&schema, "edge_cases", "Edge case schema");
    let properties = doc["properties"].as_object().unwrap();

    assert!(!properties["emptyDesc"]
        .as_object()
        .unwrap()
        .contains_key("description"));
    assert_eq!(properties["zeroLength"]["minLength"], 0);
    assert_eq!(properties["zeroLength"]["maxLength"], 0);
}

struct WithArray {
    tags: ArraySchema,
}

impl Fields for WithArray {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::schema("tags", "tags", &self.tags)]
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        vec![FieldMut::schema("tags", "tags", &mut self.tags)]
    }
}

#[test]
fn array_nodes_carry_items_and_count_bounds() {
    let schema = WithArray {
        tags: ArraySchema::new(StringSchema::new().min(1))
            .min_items(1)
            .max_items(8)
            .description("user tags"),
    };

    let doc = compile_to_value(&schema, "with_array", "");
    let tags = &doc["properties"]["tags"];

    assert_eq!(tags["type"], "array");
    assert_eq!(tags["minItems"], 1);
    assert_eq!(tags["maxItems"], 8);
    assert_eq!(tags["description"], "user tags");
    assert_eq!(tags["items"]["type"], "string");
    assert_eq!(tags["items"]["minLength"], 1);
}

#[test]
fn numeric_nodes_emit_no_bounds() {
    struct WithNumber {
        age: veritype::Int32Schema,
    }

    impl Fields for WithNumber {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![Field::schema("age", "age", &self.age)]
        }

        fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
            vec![FieldMut::schema("age", "age", &mut self.age)]
        }
    }

    let schema = WithNumber {
        age: veritype::Int32Schema::new().min(0).max(150),
    };

    let doc = compile_to_value(&schema, "with_number", "");
    let age = doc["properties"]["age"].as_object().unwrap();

    assert_eq!(age["type"], "number");
    assert!(!age.contains_key("minimum"));
    assert!(!age.contains_key("maximum"));
}

#[test]
fn compile_is_value_independent() {
    let unset = Basic {
        name: StringSchema::new().min(3),
    };
    let set = Basic {
        name: StringSchema::new().min(3).set("populated"),
    };

    let a = compile_to_value(&unset, "t", "d");
    let b = compile_to_value(&set, "t", "d");
    assert_eq!(a, b);
}

#[test]
fn compile_node_builds_a_bare_document() {
    let schema = Basic {
        name: StringSchema::new(),
    };

    let node = veritype::compile_node(&schema).unwrap();
    assert_eq!(node.schema_type, "object");
    assert!(node.title.is_empty());
    assert_eq!(node.required, vec!["name".to_string()]);
    assert_eq!(node.properties["name"].schema_type, "string");
}

#[test]
fn schema_trait_compile_reaches_every_variant() {
    // Leaf compile is also exposed directly on the trait.
    let node = StringSchema::new().min(2).compile().unwrap();
    assert_eq!(node.schema_type, "string");
    assert_eq!(node.min_length, Some(2));

    let node = veritype::BoolSchema::new().description("flag").compile().unwrap();
    assert_eq!(node.schema_type, "boolean");
    assert_eq!(node.description, "flag");
}
