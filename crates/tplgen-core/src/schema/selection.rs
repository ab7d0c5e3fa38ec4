//! User selection over the schema graph.

use super::graph::Children;
use super::path::SchemaPath;
use crate::error::{GenerateError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recursive mapping of field name to the selection below it.
///
/// Leaves are empty mappings. Deserializes from plain nested JSON objects:
///
/// ```text
/// { "MMXU": { "A": { "phsA": {} } } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<String, Selection>);

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add `name` with the given sub-selection.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, child: Selection) -> Self {
        self.0.insert(name.into(), child);
        self
    }

    /// Builder: add `name` as a leaf.
    #[must_use]
    pub fn leaf(self, name: impl Into<String>) -> Self {
        self.with(name, Selection::new())
    }

    /// Insert or replace a sub-selection.
    pub fn insert(&mut self, name: impl Into<String>, child: Selection) {
        self.0.insert(name.into(), child);
    }

    /// Get the sub-selection for `name`, if selected.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Selection> {
        self.0.get(name)
    }

    /// Check if `name` is selected.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Iterate selected fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Selection)> {
        self.0.iter().map(|(name, child)| (name.as_str(), child))
    }

    /// Number of selected fields at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if nothing is selected at this level.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ensure every selected field exists among `children`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::PathNotFound`] for the first field, in key order,
    /// that the schema does not declare below `path`.
    pub(crate) fn check_against(&self, path: &SchemaPath, children: &Children) -> Result<()> {
        match self.0.keys().find(|name| children.get(name).is_none()) {
            Some(missing) => Err(GenerateError::PathNotFound {
                path: path.child(missing.as_str()),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nested() {
        let selection: Selection =
            serde_json::from_str(r#"{"MMXU": {"A": {"phsA": {}, "phsB": {}}}}"#).unwrap();
        let a = selection.get("MMXU").and_then(|ln| ln.get("A")).unwrap();
        assert_eq!(a.len(), 2);
        assert!(a.get("phsA").unwrap().is_empty());
    }

    #[test]
    fn test_builder_matches_json() {
        let built = Selection::new().with(
            "MMXU",
            Selection::new().with("A", Selection::new().leaf("phsA")),
        );
        let parsed: Selection = serde_json::from_str(r#"{"MMXU": {"A": {"phsA": {}}}}"#).unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn test_check_against_reports_missing_child() {
        let children: Children = serde_json::from_str(r#"{"stVal": {}, "q": {}}"#).unwrap();
        let selection = Selection::new().leaf("stVal").leaf("t");
        let err = selection
            .check_against(&SchemaPath::root("LLN0").child("Beh"), &children)
            .unwrap_err();
        assert_eq!(err.to_string(), "path not found in schema: LLN0.Beh.t");
    }
}
