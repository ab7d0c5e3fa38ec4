//! Interning table for template definitions.
//!
//! Maps content-derived ids to the one definition emitted for that content.
//! A table is scoped to a single generation run: sharing it across runs
//! would suppress definitions that a later, unrelated output set needs.

use super::element::Element;
use super::fingerprint::fingerprint;
use super::ids::TemplateId;
use super::{TemplateSet, Tier};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// An interned definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    tier: Tier,
    element: Element,
}

impl Template {
    /// Tier the definition was interned under.
    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// The definition, with its `id` attribute set.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }
}

/// Interning table with at most one definition per id.
#[derive(Clone, Debug, Default)]
pub struct TemplateTable {
    /// Definitions in first-emission order.
    entries: Vec<Template>,
    /// Id -> index into entries.
    index: BTreeMap<TemplateId, usize>,
    /// Number of lookups answered by an existing definition.
    reused: usize,
}

impl TemplateTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `id` if already interned, otherwise build, register and return it.
    ///
    /// `build` runs only when `id` is new. The stored element gets its `id`
    /// attribute set to `id`.
    pub fn intern_or_reuse<F>(&mut self, id: TemplateId, tier: Tier, build: F) -> TemplateId
    where
        F: FnOnce() -> Element,
    {
        if self.index.contains_key(&id) {
            self.reused += 1;
            trace!(%id, ?tier, "reusing interned template");
            return id;
        }

        let mut element = build();
        element.set_attribute("id", id.as_str());
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push(Template { tier, element });
        debug!(%id, ?tier, "interned template");
        id
    }

    /// Fingerprint `element`, derive its id from `name`, and intern it.
    pub fn intern(&mut self, tier: Tier, name: &str, element: Element) -> TemplateId {
        let id = TemplateId::new(name, &fingerprint(tier, &element));
        self.intern_or_reuse(id, tier, move || element)
    }

    /// Get a definition by id.
    #[must_use]
    pub fn get(&self, id: &TemplateId) -> Option<&Template> {
        self.index.get(id).map(|&idx| &self.entries[idx])
    }

    /// Check if an id is interned.
    #[must_use]
    pub fn contains(&self, id: &TemplateId) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate definitions in first-emission order.
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.entries.iter()
    }

    /// Number of distinct definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of interning requests answered by an existing definition.
    #[must_use]
    pub fn reuse_count(&self) -> usize {
        self.reused
    }

    /// Split the table into per-tier output sets.
    #[must_use]
    pub fn into_set(self) -> TemplateSet {
        let mut set = TemplateSet::default();
        for Template { tier, element } in self.entries {
            set.push(tier, element);
        }
        set.reused = self.reused;
        set
    }
}
