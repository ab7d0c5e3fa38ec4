//! Schema node shape.

use super::de;
use super::graph::Children;
use serde::{Deserialize, Serialize};

/// Declared type kind of a schema node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    /// Primitive value with a base type name.
    Basic,
    /// Enumeration whose children are its literals.
    Enumerated,
    /// Composite attribute with nested children.
    Constructed,
    /// Nested data object.
    SubObject,
    /// Kind deferred to `underlyingTypeKind`.
    Undefined,
}

impl TypeKind {
    /// Get the schema document spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "BASIC",
            Self::Enumerated => "ENUMERATED",
            Self::Constructed => "CONSTRUCTED",
            Self::SubObject => "SUB_OBJECT",
            Self::Undefined => "UNDEFINED",
        }
    }
}

/// Tag name the schema uses for nested data objects.
const SUB_DATA_OBJECT_TAG: &str = "SubDataObject";

/// A node in the master schema graph.
///
/// Field names follow the schema JSON document; unknown fields are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    /// Element tag the schema declared this node with (e.g. `SubDataObject`).
    #[serde(default)]
    pub tag_name: Option<String>,
    /// Declared kind. `None` is treated as `BASIC` by leaf dispatch.
    #[serde(default, rename = "typeKind")]
    pub kind: Option<TypeKind>,
    /// Base type for basic attributes, CDC for data objects.
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    /// Kind used when `kind` is `UNDEFINED`.
    #[serde(default)]
    pub underlying_type_kind: Option<TypeKind>,
    /// Base type used when `kind` is `UNDEFINED` and the underlying kind is `BASIC`.
    #[serde(default)]
    pub underlying_type: Option<String>,
    /// Ordinal of an enumeration literal.
    #[serde(default, rename = "literalVal", deserialize_with = "de::ordinal")]
    pub ordinal: Option<i64>,
    /// Functional constraint (data-object attributes only).
    #[serde(default)]
    pub fc: Option<String>,
    /// Marks a data object whose values are not retained across restarts.
    #[serde(default, deserialize_with = "de::flag")]
    pub transient: bool,
    /// Data-change trigger option.
    #[serde(default, deserialize_with = "de::flag")]
    pub dchg: bool,
    /// Data-update trigger option.
    #[serde(default, deserialize_with = "de::flag")]
    pub dupd: bool,
    /// Quality-change trigger option.
    #[serde(default, deserialize_with = "de::flag")]
    pub qchg: bool,
    /// Children in schema-declared order.
    #[serde(default, rename = "dependencies")]
    pub children: Children,
}

impl SchemaNode {
    /// Check if this node declares a nested data object.
    #[must_use]
    pub fn is_sub_object(&self) -> bool {
        self.kind == Some(TypeKind::SubObject)
            || self.tag_name.as_deref() == Some(SUB_DATA_OBJECT_TAG)
    }

    /// Look up a direct child by field name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&SchemaNode> {
        self.children.get(name)
    }
}
