//! Data object tier.

use super::leaf::{apply_trigger_options, resolve_leaf_type};
use crate::error::{GenerateError, Result};
use crate::model::{Element, TemplateId, Tier};
use crate::resolver::context::{ResolverContext, StatusSelection, STATUS_FIELD};
use crate::schema::{SchemaPath, Selection};

/// Resolve the data object at `path` into a `DOType`.
///
/// The node's CDC (`type`) is carried onto the definition as `cdc`. Selected
/// sub data objects recurse and are prepended as `SDO` references; every
/// other selected child becomes a `DA` appended after them. The object's own
/// `stVal` selection is the status context for its attributes.
///
/// # Errors
///
/// [`GenerateError::EmptySelection`] if `selection` is `None`, plus any error
/// from resolving a selected child.
pub fn resolve_data_object(
    ctx: &mut ResolverContext<'_>,
    path: &SchemaPath,
    selection: Option<&Selection>,
) -> Result<TemplateId> {
    let selection = selection.ok_or_else(|| GenerateError::EmptySelection { path: path.clone() })?;
    let schema = ctx.schema;
    let node = schema.resolve(path)?;
    selection.check_against(path, &node.children)?;

    let mut do_type = Element::new(Tier::DataObject.tag());
    if let Some(cdc) = &node.type_name {
        do_type.set_attribute("cdc", cdc.as_str());
    }

    let status_path = path.child(STATUS_FIELD);
    let status = StatusSelection::of_data_object(&status_path, selection);

    for (name, child) in node.children.iter() {
        let Some(child_selection) = selection.get(name) else {
            continue;
        };
        let child_path = path.child(name);

        if child.is_sub_object() {
            let id = resolve_data_object(ctx, &child_path, Some(child_selection))?;
            let mut sdo = Element::new("SDO")
                .with_attribute("name", name)
                .with_attribute("type", id.as_str());
            if child.transient {
                sdo.set_attribute("transient", "true");
            }
            do_type.prepend(sdo);
        } else {
            let leaf = resolve_leaf_type(ctx, &child_path, child, child_selection, status)?;
            let mut da = Element::new("DA").with_attribute("name", name);
            if let Some(fc) = &child.fc {
                da.set_attribute("fc", fc.as_str());
            }
            leaf.apply(&mut da);
            apply_trigger_options(child, &mut da);
            do_type.append(da);
        }
    }

    Ok(ctx.table.intern(Tier::DataObject, path.last(), do_type))
}
