//! Resolution context (schema snapshot and interning state of one run).

use crate::model::{TemplateSet, TemplateTable};
use crate::schema::{SchemaGraph, SchemaPath, Selection};

/// Name of the status field whose selection drives deferred enumerations.
pub const STATUS_FIELD: &str = "stVal";

/// Resolution context shared by the tier resolvers.
///
/// The resolvers hold no state of their own; everything a run accumulates
/// lives in the table here.
pub struct ResolverContext<'s> {
    /// The schema snapshot being resolved against.
    pub schema: &'s SchemaGraph,
    /// Definitions emitted so far in this run.
    pub table: TemplateTable,
}

impl<'s> ResolverContext<'s> {
    /// Create a context with a fresh table.
    pub fn new(schema: &'s SchemaGraph) -> Self {
        Self {
            schema,
            table: TemplateTable::new(),
        }
    }

    /// Consume the context, yielding the output sets.
    pub fn into_set(self) -> TemplateSet {
        self.table.into_set()
    }
}

/// Selection of a status field, handed down to attributes whose enumerated
/// values are declared by that field rather than by themselves.
#[derive(Clone, Copy, Debug)]
pub struct StatusSelection<'a> {
    /// Schema path of the status field; its children are the literals.
    pub path: &'a SchemaPath,
    /// What the user selected below the status field.
    pub selection: &'a Selection,
}

impl<'a> StatusSelection<'a> {
    /// Status context of a data object, if its status field is selected.
    ///
    /// `status_path` is the path of the data object's [`STATUS_FIELD`] child.
    pub(crate) fn of_data_object(
        status_path: &'a SchemaPath,
        object_selection: &'a Selection,
    ) -> Option<Self> {
        object_selection
            .get(STATUS_FIELD)
            .map(|selection| StatusSelection {
                path: status_path,
                selection,
            })
    }
}
