//! Generic line-corpus baskets.
use serde_json::Value;

use super::{require_array, require_str, Normalize};
use crate::error::Error;
use crate::types::{Record, TagValue};

/// Normalizer for generic line-corpus baskets.
///
/// Expected shape: `data` holding `[tag, value]` pairs, `doc_title`,
/// `sec_title` and `text`. Both section name and text survive into the
/// record.
#[derive(Debug)]
pub struct LineNormalizer;

impl Normalize for LineNormalizer {
    fn normalize(&self, basket: &Value) -> Result<Record, Error> {
        let pairs = require_array(basket, "data")?;
        let mut tag_value_list = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let tag = pair.get(0).and_then(Value::as_str);
            let value = pair.get(1).and_then(Value::as_str);
            match (tag, value) {
                (Some(tag), Some(value)) => {
                    tag_value_list.push(TagValue::new(tag.to_string(), value.to_string()))
                }
                _ => {
                    return Err(Error::Schema(
                        "data entries should be [tag, value] string pairs".to_string(),
                    ))
                }
            }
        }

        Ok(Record::with_section(
            require_str(basket, "doc_title")?.to_string(),
            require_str(basket, "sec_title")?.to_string(),
            tag_value_list,
            require_str(basket, "text")?.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn full_basket() {
        let basket = json!({
            "data": [["pays", "France"], ["région", "Hauts-de-France"]],
            "doc_title": "Douai",
            "sec_title": "Géographie",
            "text": "Douai est une commune située en France."
        });

        let record = LineNormalizer.normalize(&basket).unwrap();
        assert_eq!(record.doc_name(), "Douai");
        assert_eq!(record.section_name(), Some("Géographie"));
        assert_eq!(record.text(), Some("Douai est une commune située en France."));
        assert_eq!(record.tag_value_list().len(), 2);
        assert_eq!(record.tag_value_list()[0].tag(), "pays");
        assert_eq!(record.tag_value_list()[0].value(), "France");
    }

    #[test]
    fn missing_title_names_the_key() {
        let basket = json!({
            "data": [],
            "sec_title": "S",
            "text": "t"
        });

        let err = LineNormalizer.normalize(&basket).unwrap_err();
        assert!(matches!(err, Error::Schema(msg) if msg.contains("doc_title")));
    }

    #[test]
    fn non_string_pair_is_rejected() {
        let basket = json!({
            "data": [["tag", 3]],
            "doc_title": "D",
            "sec_title": "S",
            "text": "t"
        });

        let err = LineNormalizer.normalize(&basket).unwrap_err();
        assert!(matches!(err, Error::Schema(_)));
    }

    #[test]
    fn extra_pair_elements_are_ignored() {
        // only the first two entries of a pair are read
        let basket = json!({
            "data": [["tag", "value", "extra"]],
            "doc_title": "D",
            "sec_title": "S",
            "text": "t"
        });

        let record = LineNormalizer.normalize(&basket).unwrap();
        assert_eq!(record.tag_value_list().len(), 1);
        assert_eq!(record.tag_value_list()[0].value(), "value");
    }
}
