//! Content fingerprints for template definitions.
//!
//! The fingerprint covers what a definition contains, never where it was
//! built. Enumerations hash their `(ordinal, label)` members sorted by
//! ordinal, so the order literals were visited in does not matter. The
//! other tiers hash tag, attributes, text and children in append order;
//! that order comes from the schema and is already deterministic.
//!
//! The root `id` attribute is excluded since it is derived from the result.

use super::element::Element;
use super::Tier;
use sha2::{Digest, Sha256};

/// Number of digest bytes kept in the hex fingerprint.
pub const FINGERPRINT_BYTES: usize = 8;

/// Compute the fingerprint of a definition of the given tier.
#[must_use]
pub fn fingerprint(tier: Tier, element: &Element) -> String {
    let mut hasher = Sha256::new();
    match tier {
        Tier::Enumeration => hash_enum_members(&mut hasher, element),
        _ => hash_element(&mut hasher, element, true),
    }
    let digest = hasher.finalize();
    hex::encode(&digest[..FINGERPRINT_BYTES])
}

/// Length-prefixed so that adjacent fields cannot run into each other.
fn update_str(hasher: &mut Sha256, s: &str) {
    hasher.update((s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

fn hash_enum_members(hasher: &mut Sha256, element: &Element) {
    let mut members: Vec<(Option<i64>, &str)> = element
        .children()
        .iter()
        .filter(|child| child.tag() == "EnumVal")
        .map(|val| {
            let ord = val.attribute("ord").and_then(|ord| ord.parse().ok());
            (ord, val.text().unwrap_or(""))
        })
        .collect();
    members.sort();

    hasher.update(b"vals");
    hasher.update((members.len() as u64).to_le_bytes());
    for (ord, label) in members {
        match ord {
            Some(ord) => {
                hasher.update([1u8]);
                hasher.update(ord.to_le_bytes());
            }
            None => hasher.update([0u8]),
        }
        update_str(hasher, label);
    }
}

fn hash_element(hasher: &mut Sha256, element: &Element, is_root: bool) {
    update_str(hasher, element.tag());

    let attributes: Vec<_> = element
        .attributes()
        .filter(|(name, _)| !(is_root && *name == "id"))
        .collect();
    hasher.update((attributes.len() as u64).to_le_bytes());
    for (name, value) in attributes {
        update_str(hasher, name);
        update_str(hasher, value);
    }

    match element.text() {
        Some(text) => {
            hasher.update([1u8]);
            update_str(hasher, text);
        }
        None => hasher.update([0u8]),
    }

    hasher.update((element.children().len() as u64).to_le_bytes());
    for child in element.children() {
        hash_element(hasher, child, false);
    }
}
