//! Knowledge-graph entity baskets.
use serde_json::Value;

use super::{require, require_object, require_str, Normalize};
use crate::error::Error;
use crate::types::{Record, TagValue};

/// Normalizer for knowledge-graph baskets.
///
/// Expected shape: `<entity>_details` mapping each tag to a sequence of
/// value records, plus `<entity>_name` for the document name. Only value
/// records whose `data` field holds a plain string contribute an annotation;
/// nested shapes are skipped, not errors.
#[derive(Debug)]
pub struct EntityNormalizer {
    details_key: String,
    name_key: String,
}

impl EntityNormalizer {
    /// Build a normalizer for the given entity prefix, e.g. `wikidata`.
    pub fn new(entity: &str) -> Self {
        Self {
            details_key: format!("{}_details", entity),
            name_key: format!("{}_name", entity),
        }
    }
}

impl Normalize for EntityNormalizer {
    fn normalize(&self, basket: &Value) -> Result<Record, Error> {
        let details = require_object(basket, &self.details_key)?;

        let mut tag_value_list = Vec::new();
        for (tag, value_records) in details {
            let value_records = value_records.as_array().ok_or_else(|| {
                Error::Schema(format!(
                    "key {} should map tags to sequences of value records",
                    self.details_key
                ))
            })?;
            for value_record in value_records {
                match require(value_record, "data")? {
                    Value::String(data) => {
                        tag_value_list.push(TagValue::new(tag.clone(), data.clone()))
                    }
                    // nested values hold qualified statements, not plain text
                    _ => continue,
                }
            }
        }

        Ok(Record::new(
            require_str(basket, &self.name_key)?.to_string(),
            tag_value_list,
        ))
    }
}
