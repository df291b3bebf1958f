/*! Basket normalization

A basket is one raw JSON object from the input corpus. Each source kind lays
its annotations out differently; normalizers bring every shape down to the
canonical [Record](crate::types::Record).

Normalizers are capability values regrouped in [NormalizerKind]: callers pick
the variant matching the corpus source, there is no inheritance chain to walk.
!*/
use serde_json::Map;
use serde_json::Value;

use crate::error::Error;
use crate::types::Record;

mod entity;
mod infobox;
mod line;

pub use entity::EntityNormalizer;
pub use infobox::InfoboxNormalizer;
pub use line::LineNormalizer;

/// Converts one raw basket into a canonical [Record].
pub trait Normalize {
    fn normalize(&self, basket: &Value) -> Result<Record, Error>;
}

/// Regroups normalizer kinds.
#[derive(Debug)]
pub enum NormalizerKind {
    Line(LineNormalizer),
    Entity(EntityNormalizer),
    Infobox(InfoboxNormalizer),
}

impl Normalize for NormalizerKind {
    fn normalize(&self, basket: &Value) -> Result<Record, Error> {
        match self {
            Self::Line(n) => n.normalize(basket),
            Self::Entity(n) => n.normalize(basket),
            Self::Infobox(n) => n.normalize(basket),
        }
    }
}

fn require<'a>(basket: &'a Value, key: &str) -> Result<&'a Value, Error> {
    basket
        .get(key)
        .ok_or_else(|| Error::Schema(format!("missing key: {}", key)))
}

fn require_str<'a>(basket: &'a Value, key: &str) -> Result<&'a str, Error> {
    require(basket, key)?
        .as_str()
        .ok_or_else(|| Error::Schema(format!("key {} should hold a string", key)))
}

fn require_array<'a>(basket: &'a Value, key: &str) -> Result<&'a Vec<Value>, Error> {
    require(basket, key)?
        .as_array()
        .ok_or_else(|| Error::Schema(format!("key {} should hold a sequence", key)))
}

fn require_object<'a>(basket: &'a Value, key: &str) -> Result<&'a Map<String, Value>, Error> {
    require(basket, key)?
        .as_object()
        .ok_or_else(|| Error::Schema(format!("key {} should hold a mapping", key)))
}
