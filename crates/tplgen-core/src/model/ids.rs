//! Template identifiers.
//!
//! A template id is `<name>$<fingerprint>`: the terminal schema field name for
//! readability, followed by the content fingerprint for uniqueness.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Separator between the readable name and the fingerprint.
pub const ID_SEPARATOR: char = '$';

/// Identifier of an interned template definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    /// Build an id from a readable name and a fingerprint.
    #[must_use]
    pub fn new(name: &str, fingerprint: &str) -> Self {
        Self(format!("{name}{ID_SEPARATOR}{fingerprint}"))
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Readable name part.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0
            .rsplit_once(ID_SEPARATOR)
            .map_or(self.0.as_str(), |(name, _)| name)
    }

    /// Fingerprint part.
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        self.0.rsplit_once(ID_SEPARATOR).map_or("", |(_, hash)| hash)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for TemplateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for TemplateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
