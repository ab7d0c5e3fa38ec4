//! Master schema graph and user selection.
//!
//! The schema graph describes every typed field of the modeling language,
//! nested by field name below logical-node class roots. A [`Selection`]
//! mirrors its shape, restricted to the fields the user wants materialized.
//!
//! Both are read-only inputs, loaded once before generation and never
//! mutated afterwards.

mod de;
mod graph;
mod node;
mod path;
mod selection;

pub use graph::{Children, SchemaGraph};
pub use node::{SchemaNode, TypeKind};
pub use path::SchemaPath;
pub use selection::Selection;
