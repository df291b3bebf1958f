//! Canonical record types.
//!
//! Whatever the source shape of a basket, normalization lands on [Record]:
//! a document name, an ordered list of tag/value pairs, and, for line-corpus
//! sources only, a section name and the section text.
use schemars::{schema_for, JsonSchema};
use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;

/// A single tag/value annotation.
///
/// Duplicates are meaningful (repeated attributes), so nothing here is
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TagValue {
    tag: String,
    value: String,
}

impl TagValue {
    pub fn new(tag: String, value: String) -> Self {
        Self { tag, value }
    }

    /// Get a reference to the tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get a reference to the value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A normalized basket.
///
/// `section_name` and `text` are present for line-corpus records and absent
/// for entity-derived ones (knowledge graph, infobox), which only carry
/// document-level annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Record {
    doc_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    section_name: Option<String>,
    tag_value_list: Vec<TagValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl Record {
    /// Record for a document-level entity: no section, no text.
    pub fn new(doc_name: String, tag_value_list: Vec<TagValue>) -> Self {
        Self {
            doc_name,
            section_name: None,
            tag_value_list,
            text: None,
        }
    }

    /// Record for a corpus section carrying its source text.
    pub fn with_section(
        doc_name: String,
        section_name: String,
        tag_value_list: Vec<TagValue>,
        text: String,
    ) -> Self {
        Self {
            doc_name,
            section_name: Some(section_name),
            tag_value_list,
            text: Some(text),
        }
    }

    /// Get a reference to the document name.
    pub fn doc_name(&self) -> &str {
        &self.doc_name
    }

    /// Get a reference to the section name, if any.
    pub fn section_name(&self) -> Option<&str> {
        self.section_name.as_deref()
    }

    /// Get a reference to the tag/value pairs, in input order.
    pub fn tag_value_list(&self) -> &[TagValue] {
        &self.tag_value_list
    }

    /// Get a reference to the section text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// JSON schema of the canonical record, pretty-printed.
    pub fn get_schema() -> Result<String, Error> {
        serde_json::to_string_pretty(&schema_for!(Record)).map_err(Error::Json)
    }
}
