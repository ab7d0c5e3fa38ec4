//! Generated template model.
//!
//! Definitions are materialized as [`Element`] trees and interned in a
//! [`TemplateTable`] keyed by [`TemplateId`]. A finished run yields a
//! [`TemplateSet`] holding one output set per [`Tier`].
//!
//! # Usage
//!
//! ```ignore
//! let mut table = TemplateTable::new();
//! let id = table.intern(Tier::Attribute, "Vector", element);
//! let set = table.into_set();
//! assert!(set.find(&id).is_some());
//! ```

mod element;
mod fingerprint;
mod ids;
mod table;

pub use element::Element;
pub use fingerprint::{fingerprint, FINGERPRINT_BYTES};
pub use ids::{TemplateId, ID_SEPARATOR};
pub use table::{Template, TemplateTable};

use core::fmt;
use serde::{Deserialize, Serialize};

/// One of the four template categories, each built from the one below it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    /// `EnumType`: ordered `(ordinal, label)` members.
    Enumeration,
    /// `DAType`: composite attribute of basic, enumerated and nested attributes.
    Attribute,
    /// `DOType`: data object of attributes and nested data objects.
    DataObject,
    /// `LNodeType`: logical node of data objects.
    LogicalNode,
}

impl Tier {
    /// All tiers, bottom-up.
    pub const ALL: [Tier; 4] = [
        Tier::Enumeration,
        Tier::Attribute,
        Tier::DataObject,
        Tier::LogicalNode,
    ];

    /// Element tag of definitions in this tier.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Enumeration => "EnumType",
            Self::Attribute => "DAType",
            Self::DataObject => "DOType",
            Self::LogicalNode => "LNodeType",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The four output sets of one generation run.
///
/// Each set lists definitions in the order they were first emitted, which is
/// deterministic for a given schema graph and selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSet {
    pub ln_types: Vec<Element>,
    pub do_types: Vec<Element>,
    pub da_types: Vec<Element>,
    pub enum_types: Vec<Element>,
    #[serde(skip)]
    reused: usize,
}

/// Summary counts of a [`TemplateSet`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TemplateStats {
    pub ln_types: usize,
    pub do_types: usize,
    pub da_types: usize,
    pub enum_types: usize,
    /// Interning requests answered by an existing definition.
    pub reused: usize,
}

impl TemplateStats {
    /// Total number of distinct definitions.
    #[must_use]
    pub fn total(&self) -> usize {
        self.ln_types + self.do_types + self.da_types + self.enum_types
    }
}

impl TemplateSet {
    /// Definitions of one tier.
    #[must_use]
    pub fn tier(&self, tier: Tier) -> &[Element] {
        match tier {
            Tier::Enumeration => &self.enum_types,
            Tier::Attribute => &self.da_types,
            Tier::DataObject => &self.do_types,
            Tier::LogicalNode => &self.ln_types,
        }
    }

    fn push(&mut self, tier: Tier, element: Element) {
        match tier {
            Tier::Enumeration => self.enum_types.push(element),
            Tier::Attribute => self.da_types.push(element),
            Tier::DataObject => self.do_types.push(element),
            Tier::LogicalNode => self.ln_types.push(element),
        }
    }

    /// Find a definition in any tier by id.
    #[must_use]
    pub fn find(&self, id: &TemplateId) -> Option<&Element> {
        Tier::ALL
            .iter()
            .flat_map(|&tier| self.tier(tier))
            .find(|element| element.id() == Some(id.as_str()))
    }

    /// Total number of definitions across all tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stats().total()
    }

    /// Check if no definitions were generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn stats(&self) -> TemplateStats {
        TemplateStats {
            ln_types: self.ln_types.len(),
            do_types: self.do_types.len(),
            da_types: self.da_types.len(),
            enum_types: self.enum_types.len(),
            reused: self.reused,
        }
    }
}
