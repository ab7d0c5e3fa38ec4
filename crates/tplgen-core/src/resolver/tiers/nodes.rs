//! Logical node tier.

use super::resolve_data_object;
use crate::error::Result;
use crate::model::{Element, TemplateId, Tier};
use crate::resolver::context::ResolverContext;
use crate::schema::{SchemaPath, Selection};

/// Resolve the logical-node class `name` into an `LNodeType`.
///
/// Class names are top-level keys of the schema graph. Each selected data
/// object becomes a `DO` reference carrying the schema's `transient` flag.
///
/// # Errors
///
/// [`crate::GenerateError::PathNotFound`] if the class or a selected data
/// object is unknown, plus any error from resolving a data object.
pub fn resolve_logical_node(
    ctx: &mut ResolverContext<'_>,
    name: &str,
    selection: &Selection,
) -> Result<TemplateId> {
    let path = SchemaPath::root(name);
    let schema = ctx.schema;
    let node = schema.resolve(&path)?;
    selection.check_against(&path, &node.children)?;

    let mut ln_type = Element::new(Tier::LogicalNode.tag()).with_attribute("lnClass", name);
    for (do_name, child) in node.children.iter() {
        let Some(do_selection) = selection.get(do_name) else {
            continue;
        };
        let id = resolve_data_object(ctx, &path.child(do_name), Some(do_selection))?;

        let mut data_object = Element::new("DO")
            .with_attribute("name", do_name)
            .with_attribute("type", id.as_str());
        if child.transient {
            data_object.set_attribute("transient", "true");
        }
        ln_type.append(data_object);
    }

    Ok(ctx.table.intern(Tier::LogicalNode, name, ln_type))
}
