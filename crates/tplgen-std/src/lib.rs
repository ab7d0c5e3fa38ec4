//! tplgen-std: Filesystem loading, rendering and CLI for tplgen
//!
//! This crate wraps `tplgen-core` for native use: reading the schema graph
//! and selection from JSON files, and rendering a generated template set as
//! an SCL `DataTypeTemplates` fragment or as JSON.

pub mod load;
pub mod render;

pub use load::{generate_from_files, load_schema, load_selection};
pub use render::{render_json, render_xml, OutputFormat};
pub use tplgen_core;
