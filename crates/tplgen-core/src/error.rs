//! Generation errors.
//!
//! Every failure is a structural mismatch between the schema graph and the
//! selection. None of them are retried, and a failed run yields no output.

use crate::schema::{SchemaPath, TypeKind};
use thiserror::Error;

/// Error returned when a selection cannot be materialized.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The selection names a field that is absent from the schema graph.
    #[error("path not found in schema: {path}")]
    PathNotFound {
        /// Path up to and including the missing segment.
        path: SchemaPath,
    },

    /// A composite attribute was requested for a node that is not `CONSTRUCTED`.
    #[error("expected a CONSTRUCTED attribute at {path}, found {}", kind_label(.found))]
    InvalidTierKind {
        /// Path of the offending node.
        path: SchemaPath,
        /// Kind declared by the schema.
        found: Option<TypeKind>,
    },

    /// A data object was resolved without any selection.
    #[error("data object at {path} was resolved without a selection")]
    EmptySelection {
        /// Path of the data object.
        path: SchemaPath,
    },

    /// An `UNDEFINED` field defers to a kind other than `BASIC` or `ENUMERATED`.
    #[error("unsupported underlying kind {} for UNDEFINED field at {path}", kind_label(.found))]
    UnexpectedUnderlyingKind {
        /// Path of the `UNDEFINED` field.
        path: SchemaPath,
        /// Underlying kind declared by the schema.
        found: Option<TypeKind>,
    },

    /// An enumeration literal carries no ordinal.
    #[error("enumeration literal at {path} has no literalVal")]
    MissingOrdinal {
        /// Path of the literal.
        path: SchemaPath,
    },
}

fn kind_label(kind: &Option<TypeKind>) -> &'static str {
    kind.map_or("<unspecified>", |kind| kind.as_str())
}

/// Result alias used throughout the resolvers.
pub type Result<T, E = GenerateError> = core::result::Result<T, E>;
