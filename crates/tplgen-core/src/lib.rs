//! tplgen-core: Structural interning of SCL data type templates
//!
//! Given a master schema graph and a user selection over it, this crate
//! emits the minimal set of `LNodeType`, `DOType`, `DAType` and `EnumType`
//! definitions needed to represent the selection. Definitions are identified
//! by a fingerprint of their content, so structurally identical definitions
//! reached from different selection paths collapse into one.
//!
//! ```text
//! SchemaGraph + Selection → Resolver → TemplateSet
//! ```
//!
//! The crate is IO-free. Loading and rendering live in `tplgen-std`.

pub mod error;
pub mod model;
pub mod resolver;
pub mod schema;

pub use error::GenerateError;
pub use model::{Element, TemplateId, TemplateSet, TemplateStats, TemplateTable, Tier};
pub use resolver::{generate, Resolver, StatusSelection};
pub use schema::{SchemaGraph, SchemaNode, SchemaPath, Selection, TypeKind};
