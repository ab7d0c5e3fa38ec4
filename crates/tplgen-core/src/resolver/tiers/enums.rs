//! Enumeration tier.

use crate::error::{GenerateError, Result};
use crate::model::{Element, TemplateId, Tier};
use crate::resolver::context::ResolverContext;
use crate::schema::{SchemaPath, Selection};

/// Resolve the selected literals of the enumeration at `path` into an `EnumType`.
///
/// An empty selection yields a valid zero-member enumeration.
///
/// # Errors
///
/// [`GenerateError::PathNotFound`] if `path` or a selected literal is absent,
/// [`GenerateError::MissingOrdinal`] if a selected literal has no ordinal.
pub fn resolve_enumeration(
    ctx: &mut ResolverContext<'_>,
    path: &SchemaPath,
    selection: &Selection,
) -> Result<TemplateId> {
    let schema = ctx.schema;
    let node = schema.resolve(path)?;
    selection.check_against(path, &node.children)?;

    let mut enum_type = Element::new(Tier::Enumeration.tag());
    for (label, literal) in node.children.iter() {
        if !selection.contains(label) {
            continue;
        }
        let ord = literal.ordinal.ok_or_else(|| GenerateError::MissingOrdinal {
            path: path.child(label),
        })?;
        enum_type.append(
            Element::new("EnumVal")
                .with_attribute("ord", ord.to_string())
                .with_text(label),
        );
    }

    Ok(ctx.table.intern(Tier::Enumeration, path.last(), enum_type))
}
