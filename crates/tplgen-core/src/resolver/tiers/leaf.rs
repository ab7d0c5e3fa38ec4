//! Leaf attribute dispatch shared by the attribute and data-object tiers.

use super::{resolve_attribute, resolve_enumeration};
use crate::error::{GenerateError, Result};
use crate::model::{Element, TemplateId};
use crate::resolver::context::{ResolverContext, StatusSelection};
use crate::schema::{SchemaNode, SchemaPath, Selection, TypeKind};

/// `bType` of attributes referencing an `EnumType`.
const ENUM_BTYPE: &str = "Enum";
/// `bType` of attributes referencing a `DAType`.
const STRUCT_BTYPE: &str = "Struct";

/// Resolved type of a leaf attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum LeafType {
    /// Literal base type name.
    Basic(String),
    /// Reference to an enumeration.
    Enum(TemplateId),
    /// Reference to a composite attribute.
    Struct(TemplateId),
}

impl LeafType {
    /// Write `bType` and, for references, `type` onto a `DA`/`BDA` element.
    pub(super) fn apply(self, element: &mut Element) {
        match self {
            Self::Basic(b_type) => element.set_attribute("bType", b_type),
            Self::Enum(id) => {
                element.set_attribute("bType", ENUM_BTYPE);
                element.set_attribute("type", id.as_str());
            }
            Self::Struct(id) => {
                element.set_attribute("bType", STRUCT_BTYPE);
                element.set_attribute("type", id.as_str());
            }
        }
    }
}

/// Resolve the type of the leaf attribute `node` at `path`.
///
/// Unspecified kinds are treated as `BASIC`. An `UNDEFINED` field whose
/// underlying kind is `ENUMERATED` takes its literals from `status`, the
/// enclosing data object's status field, instead of its own selection.
///
/// Kinds that do not recurse still validate their own selection, so a field
/// selected below a plain leaf is reported rather than dropped.
pub(super) fn resolve_leaf_type(
    ctx: &mut ResolverContext<'_>,
    path: &SchemaPath,
    node: &SchemaNode,
    selection: &Selection,
    status: Option<StatusSelection<'_>>,
) -> Result<LeafType> {
    let kind = node.kind.unwrap_or(TypeKind::Basic);
    if !matches!(kind, TypeKind::Enumerated | TypeKind::Constructed) {
        selection.check_against(path, &node.children)?;
    }

    match kind {
        TypeKind::Basic => Ok(LeafType::Basic(basic_type(node.type_name.as_deref()))),
        TypeKind::Enumerated => resolve_enumeration(ctx, path, selection).map(LeafType::Enum),
        TypeKind::Constructed => {
            resolve_attribute(ctx, path, selection, status).map(LeafType::Struct)
        }
        TypeKind::Undefined => match node.underlying_type_kind {
            Some(TypeKind::Basic) => Ok(LeafType::Basic(basic_type(
                node.underlying_type.as_deref(),
            ))),
            Some(TypeKind::Enumerated) => match status {
                Some(status) => {
                    resolve_enumeration(ctx, status.path, status.selection).map(LeafType::Enum)
                }
                None => resolve_enumeration(ctx, path, &Selection::new()).map(LeafType::Enum),
            },
            found => Err(GenerateError::UnexpectedUnderlyingKind {
                path: path.clone(),
                found,
            }),
        },
        TypeKind::SubObject => Err(GenerateError::InvalidTierKind {
            path: path.clone(),
            found: node.kind,
        }),
    }
}

fn basic_type(name: Option<&str>) -> String {
    name.unwrap_or_default().to_owned()
}

/// Copy the trigger options set on `node` onto `element`.
pub(super) fn apply_trigger_options(node: &SchemaNode, element: &mut Element) {
    for (name, set) in [("dchg", node.dchg), ("dupd", node.dupd), ("qchg", node.qchg)] {
        if set {
            element.set_attribute(name, "true");
        }
    }
}
