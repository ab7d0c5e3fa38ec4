//! Lenient field decoders for the schema document.
//!
//! The schema source writes flags both as JSON booleans and as `"true"`
//! strings, and literal ordinals both as numbers and numeric strings.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OrdinalRepr {
    Int(i64),
    Text(String),
}

pub(super) fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Option::<FlagRepr>::deserialize(deserializer)? {
        Some(FlagRepr::Bool(value)) => value,
        Some(FlagRepr::Text(text)) => text.trim().eq_ignore_ascii_case("true"),
        None => false,
    })
}

pub(super) fn ordinal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    match Option::<OrdinalRepr>::deserialize(deserializer)? {
        Some(OrdinalRepr::Int(value)) => Ok(Some(value)),
        Some(OrdinalRepr::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid literalVal {text:?}"))),
        None => Ok(None),
    }
}
