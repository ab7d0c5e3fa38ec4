//! Composite attribute tier.

use super::leaf::{apply_trigger_options, resolve_leaf_type};
use crate::error::{GenerateError, Result};
use crate::model::{Element, TemplateId, Tier};
use crate::resolver::context::{ResolverContext, StatusSelection};
use crate::schema::{SchemaPath, Selection, TypeKind};

/// Resolve the `CONSTRUCTED` attribute at `path` into a `DAType`.
///
/// Each selected child becomes a `BDA`. Nested composite and enumerated
/// children recurse into their own tiers; `status` is passed down unchanged
/// for children whose literals are declared by a status field.
///
/// # Errors
///
/// [`GenerateError::InvalidTierKind`] if the node is not `CONSTRUCTED`, plus
/// any error from resolving a selected child.
pub fn resolve_attribute(
    ctx: &mut ResolverContext<'_>,
    path: &SchemaPath,
    selection: &Selection,
    status: Option<StatusSelection<'_>>,
) -> Result<TemplateId> {
    let schema = ctx.schema;
    let node = schema.resolve(path)?;
    if node.kind != Some(TypeKind::Constructed) {
        return Err(GenerateError::InvalidTierKind {
            path: path.clone(),
            found: node.kind,
        });
    }
    selection.check_against(path, &node.children)?;

    let mut da_type = Element::new(Tier::Attribute.tag());
    for (name, child) in node.children.iter() {
        let Some(child_selection) = selection.get(name) else {
            continue;
        };
        let child_path = path.child(name);
        let leaf = resolve_leaf_type(ctx, &child_path, child, child_selection, status)?;

        let mut bda = Element::new("BDA").with_attribute("name", name);
        leaf.apply(&mut bda);
        apply_trigger_options(child, &mut bda);
        da_type.append(bda);
    }

    Ok(ctx.table.intern(Tier::Attribute, path.last(), da_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::tiers::resolve_enumeration;
    use crate::schema::SchemaGraph;

    const SCHEMA: &str = r#"{
        "MMXU": { "dependencies": {
            "A": { "type": "WYE", "dependencies": {
                "phsA": { "tagName": "SubDataObject", "type": "CMV", "dependencies": {
                    "cVal": { "typeKind": "CONSTRUCTED", "type": "Vector", "fc": "MX", "dchg": "true", "dependencies": {
                        "mag": { "typeKind": "CONSTRUCTED", "type": "AnalogueValue", "dependencies": {
                            "f": { "typeKind": "BASIC", "type": "FLOAT32" },
                            "i": { "typeKind": "BASIC", "type": "INT32" }
                        }},
                        "ang": { "typeKind": "CONSTRUCTED", "type": "AnalogueValue", "dependencies": {
                            "f": { "typeKind": "BASIC", "type": "FLOAT32" },
                            "i": { "typeKind": "BASIC", "type": "INT32" }
                        }}
                    }},
                    "q": { "typeKind": "BASIC", "type": "Quality", "fc": "MX", "qchg": "true" }
                }}
            }}
        }}
    }"#;

    fn c_val() -> SchemaPath {
        ["MMXU", "A", "phsA", "cVal"].into_iter().collect()
    }

    fn type_ref(element: &Element, name: &str) -> TemplateId {
        let child = element.child_named("BDA", name).unwrap();
        TemplateId::from(child.attribute("type").unwrap())
    }

    #[test]
    fn test_nested_composites_recurse() {
        let schema = SchemaGraph::from_json(SCHEMA).unwrap();
        let mut ctx = ResolverContext::new(&schema);
        let selection = Selection::new()
            .with("mag", Selection::new().leaf("f"))
            .with("ang", Selection::new().leaf("f"));

        let id = resolve_attribute(&mut ctx, &c_val(), &selection, None).unwrap();
        let vector = ctx.table.get(&id).unwrap().element().clone();
        assert_eq!(id.name(), "cVal");

        let mag = type_ref(&vector, "mag");
        let ang = type_ref(&vector, "ang");
        assert_eq!(vector.child_named("BDA", "mag").unwrap().attribute("bType"), Some("Struct"));
        // Equal content under different terminal names.
        assert_ne!(mag, ang);
        assert_eq!(mag.fingerprint(), ang.fingerprint());
        assert_eq!(ctx.table.len(), 3);
    }

    #[test]
    fn test_unselected_children_skipped() {
        let schema = SchemaGraph::from_json(SCHEMA).unwrap();
        let mut ctx = ResolverContext::new(&schema);
        let selection = Selection::new().with("mag", Selection::new().leaf("f"));

        let id = resolve_attribute(&mut ctx, &c_val(), &selection, None).unwrap();
        let vector = ctx.table.get(&id).unwrap().element().clone();
        assert_eq!(vector.children().len(), 1);
        assert!(vector.child_named("BDA", "ang").is_none());

        let mag = ctx.table.get(&type_ref(&vector, "mag")).unwrap().element();
        let f = mag.child_named("BDA", "f").unwrap();
        assert_eq!(f.attribute("bType"), Some("FLOAT32"));
        assert!(mag.child_named("BDA", "i").is_none());
    }

    #[test]
    fn test_rejects_non_constructed() {
        let schema = SchemaGraph::from_json(SCHEMA).unwrap();
        let mut ctx = ResolverContext::new(&schema);
        let path: SchemaPath = ["MMXU", "A", "phsA", "q"].into_iter().collect();

        let err = resolve_attribute(&mut ctx, &path, &Selection::new(), None).unwrap_err();
        assert_eq!(
            err,
            GenerateError::InvalidTierKind {
                path,
                found: Some(TypeKind::Basic)
            }
        );
        assert!(ctx.table.is_empty());
    }

    #[test]
    fn test_basic_leaf_carries_trigger_options() {
        let schema = SchemaGraph::from_json(
            r#"{"X": {"dependencies": {"D": {"dependencies": {
                "s": { "typeKind": "CONSTRUCTED", "dependencies": {
                    "v": { "type": "INT32", "dchg": true, "dupd": "true" }
                }}
            }}}}}"#,
        )
        .unwrap();
        let mut ctx = ResolverContext::new(&schema);
        let path: SchemaPath = ["X", "D", "s"].into_iter().collect();

        let id = resolve_attribute(&mut ctx, &path, &Selection::new().leaf("v"), None).unwrap();
        let v = ctx.table.get(&id).unwrap().element().child_named("BDA", "v").unwrap().clone();
        assert_eq!(v.attribute("bType"), Some("INT32"));
        assert_eq!(v.attribute("dchg"), Some("true"));
        assert_eq!(v.attribute("dupd"), Some("true"));
        assert_eq!(v.attribute("qchg"), None);
    }

    const STATUS_SCHEMA: &str = r#"{
        "GGIO": { "dependencies": {
            "Ind": { "tagName": "DataObject", "type": "ENS", "dependencies": {
                "stVal": { "typeKind": "ENUMERATED", "type": "OnOffKind", "fc": "ST", "dependencies": {
                    "on": { "literalVal": "1" },
                    "off": { "literalVal": "2" }
                }},
                "detail": { "typeKind": "CONSTRUCTED", "type": "Detail", "fc": "ST", "dependencies": {
                    "val": { "typeKind": "UNDEFINED", "underlyingTypeKind": "ENUMERATED" },
                    "kind": { "typeKind": "ENUMERATED", "type": "DetailKind", "dependencies": {
                        "a": { "literalVal": "1" },
                        "b": { "literalVal": "2" }
                    }},
                    "note": { "typeKind": "UNDEFINED", "underlyingTypeKind": "BASIC", "underlyingType": "VisString64" }
                }}
            }}
        }}
    }"#;

    fn ind() -> SchemaPath {
        SchemaPath::root("GGIO").child("Ind")
    }

    fn members(ctx: &ResolverContext<'_>, id: &TemplateId) -> Vec<(String, String)> {
        ctx.table
            .get(id)
            .unwrap()
            .element()
            .children()
            .iter()
            .map(|val| {
                let ord = val.attribute("ord").unwrap().to_owned();
                (ord, val.text().unwrap().to_owned())
            })
            .collect()
    }

    #[test]
    fn test_nested_leaf_kinds_with_status() {
        let schema = SchemaGraph::from_json(STATUS_SCHEMA).unwrap();
        let mut ctx = ResolverContext::new(&schema);
        let status_path = ind().child("stVal");
        let status_selection = Selection::new().leaf("on");
        let status = StatusSelection {
            path: &status_path,
            selection: &status_selection,
        };
        let selection = Selection::new()
            .leaf("val")
            .with("kind", Selection::new().leaf("b"))
            .leaf("note");

        let id =
            resolve_attribute(&mut ctx, &ind().child("detail"), &selection, Some(status)).unwrap();
        let detail = ctx.table.get(&id).unwrap().element().clone();

        // val declares no literals; it takes the status field's selection.
        let val = detail.child_named("BDA", "val").unwrap();
        assert_eq!(val.attribute("bType"), Some("Enum"));
        let val_type = type_ref(&detail, "val");
        assert_eq!(val_type.name(), "stVal");
        assert_eq!(members(&ctx, &val_type), [("1".to_owned(), "on".to_owned())]);
        let st_val = resolve_enumeration(&mut ctx, &status_path, &status_selection).unwrap();
        assert_eq!(st_val, val_type);

        let kind = detail.child_named("BDA", "kind").unwrap();
        assert_eq!(kind.attribute("bType"), Some("Enum"));
        let kind_type = type_ref(&detail, "kind");
        assert_eq!(kind_type.name(), "kind");
        assert_eq!(members(&ctx, &kind_type), [("2".to_owned(), "b".to_owned())]);

        let note = detail.child_named("BDA", "note").unwrap();
        assert_eq!(note.attribute("bType"), Some("VisString64"));
        assert_eq!(note.attribute("type"), None);
    }

    #[test]
    fn test_nested_undefined_enum_without_status() {
        let schema = SchemaGraph::from_json(STATUS_SCHEMA).unwrap();
        let mut ctx = ResolverContext::new(&schema);

        let selection = Selection::new().leaf("val");
        let id = resolve_attribute(&mut ctx, &ind().child("detail"), &selection, None).unwrap();
        let detail = ctx.table.get(&id).unwrap().element().clone();
        let val_type = type_ref(&detail, "val");
        assert_eq!(val_type.name(), "val");
        assert!(members(&ctx, &val_type).is_empty());
    }

    #[test]
    fn test_selection_below_nested_leaf_is_error() {
        let schema = SchemaGraph::from_json(STATUS_SCHEMA).unwrap();
        let mut ctx = ResolverContext::new(&schema);
        let path = ind().child("detail");
        let selection = Selection::new().with("note", Selection::new().leaf("x"));

        let err = resolve_attribute(&mut ctx, &path, &selection, None).unwrap_err();
        assert_eq!(
            err,
            GenerateError::PathNotFound {
                path: path.child("note").child("x")
            }
        );
    }
}
