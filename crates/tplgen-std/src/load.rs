//! JSON loading of schema graphs and selections.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tplgen_core::{generate, SchemaGraph, Selection, TemplateSet};
use tracing::debug;

/// Read and parse a schema graph document.
///
/// # Errors
///
/// Fails if the file cannot be read or is not a valid schema graph.
pub fn load_schema(path: impl AsRef<Path>) -> Result<SchemaGraph> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read schema {}", path.display()))?;
    let schema = SchemaGraph::from_json(&json)
        .with_context(|| format!("failed to parse schema {}", path.display()))?;
    debug!(path = %path.display(), classes = schema.classes().count(), "loaded schema");
    Ok(schema)
}

/// Read and parse a selection document.
///
/// # Errors
///
/// Fails if the file cannot be read or is not a JSON object tree.
pub fn load_selection(path: impl AsRef<Path>) -> Result<Selection> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read selection {}", path.display()))?;
    let selection: Selection = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse selection {}", path.display()))?;
    debug!(path = %path.display(), classes = selection.len(), "loaded selection");
    Ok(selection)
}

/// Load both documents and run one generation.
///
/// # Errors
///
/// Fails on any loading error, or with the underlying
/// [`tplgen_core::GenerateError`] if the selection does not fit the schema.
pub fn generate_from_files(
    schema: impl AsRef<Path>,
    selection: impl AsRef<Path>,
) -> Result<TemplateSet> {
    let graph = load_schema(schema)?;
    let selection = load_selection(selection)?;
    generate(&graph, &selection).context("template generation failed")
}
