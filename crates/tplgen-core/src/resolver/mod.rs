//! Template resolution.
//!
//! The resolver turns a [`Selection`] over a [`SchemaGraph`] into the
//! minimal [`TemplateSet`] representing it. Resolution is a synchronous
//! recursive descent through four tiers, sharing one interning table:
//!
//! ```text
//! Selection → LNodeType → DOType → DAType → EnumType
//!                            └──────┴─→ (interning table) → TemplateSet
//! ```
//!
//! A table lives for exactly one run. Any error aborts the run and discards
//! everything built so far; a partial template set is never returned.
//!
//! # Usage
//!
//! ```ignore
//! let schema = SchemaGraph::from_json(&schema_json)?;
//! let selection: Selection = serde_json::from_str(&selection_json)?;
//! let templates = generate(&schema, &selection)?;
//! for ln_type in &templates.ln_types {
//!     println!("{}", ln_type.id().unwrap_or_default());
//! }
//! ```

pub mod context;
pub mod tiers;

pub use context::{ResolverContext, StatusSelection, STATUS_FIELD};

use crate::error::Result;
use crate::model::{TemplateId, TemplateSet, TemplateTable};
use crate::schema::{SchemaGraph, SchemaPath, Selection};
use tracing::info;

/// Generate the template set for `selection` against a fresh interning table.
///
/// Logical nodes are resolved in selection key order.
///
/// # Errors
///
/// Returns the first [`crate::GenerateError`] encountered; no output is produced.
pub fn generate(schema: &SchemaGraph, selection: &Selection) -> Result<TemplateSet> {
    let mut resolver = Resolver::new(schema);
    resolver.resolve_selection(selection)?;
    Ok(resolver.finish())
}

/// Stateful entry point exposing each tier's resolution individually.
pub struct Resolver<'s> {
    ctx: ResolverContext<'s>,
}

impl<'s> Resolver<'s> {
    /// Create a resolver with a fresh interning table.
    #[must_use]
    pub fn new(schema: &'s SchemaGraph) -> Self {
        Self {
            ctx: ResolverContext::new(schema),
        }
    }

    /// Resolve every top-level entry of `selection` as a logical node.
    ///
    /// Returns the `LNodeType` id of each class in selection key order.
    pub fn resolve_selection(
        &mut self,
        selection: &Selection,
    ) -> Result<Vec<(String, TemplateId)>> {
        selection
            .iter()
            .map(|(class, sub)| {
                self.resolve_logical_node(class, sub)
                    .map(|id| (class.to_owned(), id))
            })
            .collect()
    }

    /// See [`tiers::resolve_logical_node`].
    pub fn resolve_logical_node(
        &mut self,
        class: &str,
        selection: &Selection,
    ) -> Result<TemplateId> {
        tiers::resolve_logical_node(&mut self.ctx, class, selection)
    }

    /// See [`tiers::resolve_data_object`].
    pub fn resolve_data_object(
        &mut self,
        path: &SchemaPath,
        selection: Option<&Selection>,
    ) -> Result<TemplateId> {
        tiers::resolve_data_object(&mut self.ctx, path, selection)
    }

    /// See [`tiers::resolve_attribute`].
    pub fn resolve_attribute(
        &mut self,
        path: &SchemaPath,
        selection: &Selection,
        status: Option<StatusSelection<'_>>,
    ) -> Result<TemplateId> {
        tiers::resolve_attribute(&mut self.ctx, path, selection, status)
    }

    /// See [`tiers::resolve_enumeration`].
    pub fn resolve_enumeration(
        &mut self,
        path: &SchemaPath,
        selection: &Selection,
    ) -> Result<TemplateId> {
        tiers::resolve_enumeration(&mut self.ctx, path, selection)
    }

    /// Definitions emitted so far.
    #[must_use]
    pub fn table(&self) -> &TemplateTable {
        &self.ctx.table
    }

    /// Finish the run and return the output sets.
    #[must_use]
    pub fn finish(self) -> TemplateSet {
        let set = self.ctx.into_set();
        let stats = set.stats();
        info!(
            ln_types = stats.ln_types,
            do_types = stats.do_types,
            da_types = stats.da_types,
            enum_types = stats.enum_types,
            reused = stats.reused,
            "generated templates"
        );
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tier;

    #[test]
    fn test_generate_empty_selection() {
        let schema = SchemaGraph::from_json(r#"{"LLN0": {"dependencies": {}}}"#).unwrap();
        let set = generate(&schema, &Selection::new()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_resolve_selection_returns_class_ids() {
        let schema =
            SchemaGraph::from_json(r#"{"LLN0": {"dependencies": {}}, "LPHD": {"dependencies": {}}}"#)
                .unwrap();
        let mut resolver = Resolver::new(&schema);
        let selection = Selection::new().leaf("LPHD").leaf("LLN0");

        let ids = resolver.resolve_selection(&selection).unwrap();
        let classes: Vec<_> = ids.iter().map(|(class, _)| class.as_str()).collect();
        assert_eq!(classes, ["LLN0", "LPHD"]);
        assert_eq!(resolver.table().len(), 2);
        assert!(ids.iter().all(|(_, id)| resolver.table().contains(id)));
        assert!(resolver
            .table()
            .iter()
            .all(|template| template.tier() == Tier::LogicalNode));
    }

    #[test]
    fn test_resolve_tiers_individually() {
        let schema = SchemaGraph::from_json(
            r#"{"LLN0": {"dependencies": {
                "Beh": {"type": "ENS", "dependencies": {
                    "stVal": {"typeKind": "ENUMERATED", "dependencies": {
                        "on": {"literalVal": 1},
                        "off": {"literalVal": 5}
                    }}
                }}
            }}}"#,
        )
        .unwrap();
        let beh = SchemaPath::root("LLN0").child("Beh");
        let literals = &schema.resolve(&beh.child("stVal")).unwrap().children;
        assert_eq!(literals.len(), 2);

        let mut resolver = Resolver::new(&schema);
        let on = Selection::new().leaf("on");
        let enum_id = resolver.resolve_enumeration(&beh.child("stVal"), &on).unwrap();
        let do_id = resolver
            .resolve_data_object(&beh, Some(&Selection::new().with("stVal", on)))
            .unwrap();

        // The data object reuses the enumeration interned first.
        assert_eq!(resolver.table().len(), 2);
        assert_eq!(resolver.table().reuse_count(), 1);
        let set = resolver.finish();
        let st_val = set.find(&do_id).unwrap().child_named("DA", "stVal").unwrap();
        assert_eq!(st_val.attribute("type"), Some(enum_id.as_str()));
    }
}
