//! Schema graph storage and the path accessor.

use super::node::SchemaNode;
use super::path::SchemaPath;
use crate::error::{GenerateError, Result};
use core::fmt;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Child mapping of a schema node, kept in document order.
///
/// Resolvers iterate children in this order so that generated definitions
/// do not depend on how the selection happens to be represented.
#[derive(Clone, Debug, Default)]
pub struct Children(Vec<(String, SchemaNode)>);

impl Children {
    /// Look up a child by field name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.0
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, node)| node)
    }

    /// Iterate `(field name, node)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.0.iter().map(|(field, node)| (field.as_str(), node))
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Children {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ChildrenVisitor;

        impl<'de> Visitor<'de> for ChildrenVisitor {
            type Value = Children;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field name to schema node")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Children, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, node)) = map.next_entry::<String, SchemaNode>()? {
                    entries.push((name, node));
                }
                Ok(Children(entries))
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Children, E> {
                Ok(Children::default())
            }
        }

        deserializer.deserialize_any(ChildrenVisitor)
    }
}

/// The master schema graph.
///
/// Top-level keys are logical-node class names. The graph is an immutable
/// snapshot for the duration of a generation run.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct SchemaGraph {
    roots: Children,
}

impl SchemaGraph {
    /// Parse a schema graph from its JSON document.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the document does not match the schema node shape.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Walk the graph from its root along `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::PathNotFound`] naming the prefix up to the first
    /// absent segment.
    pub fn resolve(&self, path: &SchemaPath) -> Result<&SchemaNode> {
        let mut children = &self.roots;
        let mut found = None;

        for (depth, segment) in path.segments().iter().enumerate() {
            let node = children.get(segment).ok_or_else(|| GenerateError::PathNotFound {
                path: path.prefix(depth + 1),
            })?;
            children = &node.children;
            found = Some(node);
        }

        found.ok_or_else(|| GenerateError::PathNotFound { path: path.clone() })
    }

    /// Look up a logical-node class by name.
    #[must_use]
    pub fn class(&self, name: &str) -> Option<&SchemaNode> {
        self.roots.get(name)
    }

    /// Iterate logical-node classes in document order.
    pub fn classes(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.roots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TypeKind;

    const SCHEMA: &str = r#"{
        "MMXU": {
            "dependencies": {
                "TotW": { "tagName": "DataObject", "type": "MV", "dependencies": {} },
                "A": {
                    "tagName": "DataObject",
                    "type": "WYE",
                    "dependencies": {
                        "phsA": { "typeKind": "BASIC", "type": "FLOAT32", "fc": "MX" }
                    }
                }
            }
        }
    }"#;

    #[test]
    fn test_resolve_nested() {
        let graph = SchemaGraph::from_json(SCHEMA).unwrap();
        let path: SchemaPath = ["MMXU", "A", "phsA"].into_iter().collect();
        let node = graph.resolve(&path).unwrap();
        assert_eq!(node.kind, Some(TypeKind::Basic));
        assert_eq!(node.fc.as_deref(), Some("MX"));
    }

    #[test]
    fn test_resolve_missing_segment() {
        let graph = SchemaGraph::from_json(SCHEMA).unwrap();
        let path: SchemaPath = ["MMXU", "B", "phsA"].into_iter().collect();
        let err = graph.resolve(&path).unwrap_err();
        assert_eq!(
            err,
            GenerateError::PathNotFound {
                path: SchemaPath::root("MMXU").child("B")
            }
        );
    }

    #[test]
    fn test_resolve_empty_path() {
        let graph = SchemaGraph::from_json(SCHEMA).unwrap();
        assert!(graph.resolve(&SchemaPath::default()).is_err());
    }

    #[test]
    fn test_children_keep_document_order() {
        let graph = SchemaGraph::from_json(SCHEMA).unwrap();
        let names: Vec<_> = graph
            .class("MMXU")
            .unwrap()
            .children
            .iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["TotW", "A"]);
    }

    #[test]
    fn test_null_dependencies() {
        let graph = SchemaGraph::from_json(r#"{"LPHD": {"dependencies": null}}"#).unwrap();
        assert!(graph.class("LPHD").unwrap().children.is_empty());
    }
}
