// Declaration graph for veritype
//
// Container types expose their schema-bearing members as an explicit,
// statically declared graph instead of being probed at runtime. The ensure
// traversal, the JSON-Schema compiler, and the object-level marshal/parse
// helpers all walk this one structure.

// Re-export public types and functions
pub use self::compile::{compile_node, compile_schema, CompileOptions};
pub use self::ensure::ensure;
pub use self::marshal::{marshal, parse};

// Sub-modules
pub mod compile;
pub mod ensure;
pub mod marshal;

use crate::schema::Schema;

/// A container whose named members participate in deep validation,
/// compilation, and object-level JSON encode/decode.
///
/// Members must be enumerated in declaration order; error paths and
/// document required-lists follow that order.
pub trait Fields {
    /// Enumerates the container's members for read-only walks
    /// (ensure, compile, marshal).
    fn fields(&self) -> Vec<Field<'_>>;

    /// Enumerates the container's members for mutating walks (parse).
    /// The returned set must mirror [`fields`](Self::fields).
    fn fields_mut(&mut self) -> Vec<FieldMut<'_>>;
}

/// A named member of a container.
pub struct Field<'a> {
    /// The member's declared name, used in dotted error paths.
    pub name: &'a str,
    /// The member's external (JSON) name. `None` means the member is
    /// invisible to the compiler and the marshal/parse helpers.
    pub json_tag: Option<&'a str>,
    /// What the member holds.
    pub node: FieldNode<'a>,
}

/// The shape of a container member.
pub enum FieldNode<'a> {
    /// A leaf schema: validated directly, compiled to a leaf node.
    Schema(&'a dyn Schema),
    /// A nested container: recursed into.
    Object(&'a dyn Fields),
    /// A plain data member with no schema attached. Skipped by the
    /// traversals; a compile error when bound to a JSON tag.
    Opaque,
    /// A declared schema slot with no instance bound to it. Terminates an
    /// ensure branch silently; a compile error when bound to a JSON tag.
    Unset,
}

/// Mutable counterpart of [`Field`], used by parse.
pub struct FieldMut<'a> {
    /// The member's declared name.
    pub name: &'a str,
    /// The member's external (JSON) name.
    pub json_tag: Option<&'a str>,
    /// What the member holds.
    pub node: FieldNodeMut<'a>,
}

/// Mutable counterpart of [`FieldNode`].
pub enum FieldNodeMut<'a> {
    /// A leaf schema.
    Schema(&'a mut dyn Schema),
    /// A nested container.
    Object(&'a mut dyn Fields),
    /// A plain data member.
    Opaque,
    /// An unbound schema slot.
    Unset,
}

impl<'a> Field<'a> {
    /// A tagged leaf-schema member.
    pub fn schema(name: &'a str, json_tag: &'a str, schema: &'a dyn Schema) -> Self {
        Self {
            name,
            json_tag: Some(json_tag),
            node: FieldNode::Schema(schema),
        }
    }

    /// A tagged nested-container member.
    pub fn object(name: &'a str, json_tag: &'a str, object: &'a dyn Fields) -> Self {
        Self {
            name,
            json_tag: Some(json_tag),
            node: FieldNode::Object(object),
        }
    }
}

impl<'a> FieldMut<'a> {
    /// A tagged leaf-schema member.
    pub fn schema(name: &'a str, json_tag: &'a str, schema: &'a mut dyn Schema) -> Self {
        Self {
            name,
            json_tag: Some(json_tag),
            node: FieldNodeMut::Schema(schema),
        }
    }

    /// A tagged nested-container member.
    pub fn object(name: &'a str, json_tag: &'a str, object: &'a mut dyn Fields) -> Self {
        Self {
            name,
            json_tag: Some(json_tag),
            node: FieldNodeMut::Object(object),
        }
    }
}
