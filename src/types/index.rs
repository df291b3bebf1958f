//! Per-document record index.
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use super::record::Record;

/// Mapping from document name to that document's records.
///
/// Key order is the first-appearance order of each document in the corpus;
/// records keep their input order within a document. The index is rebuilt
/// from scratch on every run, persistence is only there for reproducibility
/// and offline inspection.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentIndex {
    documents: IndexMap<String, Vec<Record>>,
}

impl DocumentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` to its document, creating the entry on first sight.
    pub fn push(&mut self, record: Record) {
        self.documents
            .entry(record.doc_name().to_owned())
            .or_insert_with(Vec::new)
            .push(record);
    }

    /// Records of a single document, in input order.
    pub fn get(&self, doc_name: &str) -> Option<&[Record]> {
        self.documents.get(doc_name).map(Vec::as_slice)
    }

    /// Iterate over documents in first-appearance order.
    pub fn documents(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.documents
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    /// Iterate over every record, in document then input order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.documents.values().flatten()
    }

    /// Number of documents.
    pub fn nb_documents(&self) -> usize {
        self.documents.len()
    }

    /// Number of records across every document.
    pub fn nb_records(&self) -> usize {
        self.documents.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
