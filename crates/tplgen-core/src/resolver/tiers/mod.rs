//! Tier resolvers.
//!
//! Four mutually recursive resolvers, one per template tier:
//!
//! 1. **Logical node** (`LNodeType`): entry point per selected class
//! 2. **Data object** (`DOType`): nested data objects and attributes
//! 3. **Composite attribute** (`DAType`): nested basic, enumerated and composite attributes
//! 4. **Enumeration** (`EnumType`): selected literals with their ordinals
//!
//! Recursion only ever descends into child paths, so plain call-stack
//! recursion terminates without a cycle guard. Each resolver walks children
//! in schema-declared order and skips children absent from the selection.

pub mod attributes;
pub mod enums;
mod leaf;
pub mod nodes;
pub mod objects;

pub use attributes::resolve_attribute;
pub use enums::resolve_enumeration;
pub use nodes::resolve_logical_node;
pub use objects::resolve_data_object;
