//! Owned element tree used to materialize template definitions.
//!
//! This is the element builder the resolvers write into: a tag, a set of
//! named string attributes, ordered children and optional text content.
//! Attributes are kept sorted by name so that serialization and hashing
//! never depend on the order they were set in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A tagged element with attributes, children and text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    tag: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Builder: set an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder: set text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Set (or replace) a named attribute.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Set text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Append a child after all existing children.
    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Insert a child before all existing children.
    pub fn prepend(&mut self, child: Element) {
        self.children.insert(0, child);
    }

    /// Element tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Iterate attributes sorted by name.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Children in append order.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Text content, if set.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The `id` attribute, if set.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// First child with the given tag whose `name` attribute matches.
    #[must_use]
    pub fn child_named(&self, tag: &str, name: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|child| child.tag == tag && child.attribute("name") == Some(name))
    }
}
