//! Infobox baskets.
use serde_json::Value;

use super::{require_object, require_str, Normalize};
use crate::error::Error;
use crate::types::{Record, TagValue};

/// Normalizer for infobox baskets.
///
/// Expected shape: `title` plus an `infobox` mapping of tags to string
/// values. Unlike [`super::EntityNormalizer`], a non-string value here is a
/// schema error rather than a skip, since infobox cells carry no nesting.
#[derive(Debug)]
pub struct InfoboxNormalizer;

impl Normalize for InfoboxNormalizer {
    fn normalize(&self, basket: &Value) -> Result<Record, Error> {
        let infobox = require_object(basket, "infobox")?;

        let mut tag_value_list = Vec::with_capacity(infobox.len());
        for (tag, value) in infobox {
            let value = value.as_str().ok_or_else(|| {
                Error::Schema(format!("infobox entry {} should hold a string", tag))
            })?;
            tag_value_list.push(TagValue::new(tag.clone(), value.to_string()));
        }

        Ok(Record::new(
            require_str(basket, "title")?.to_string(),
            tag_value_list,
        ))
    }
}
