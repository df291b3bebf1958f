//! Tag and value frequency tables.
use std::cmp::Reverse;
use std::path::Path;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::error::Error;
use crate::io::{Saver, TextSaver};
use crate::types::DocumentIndex;

/// Occurrence counts for every tag and value of an index.
///
/// Every [crate::types::TagValue] occurrence counts, repeated annotations
/// included. The counters keep first-seen order, which decides ties in the
/// ranked views.
#[derive(Debug, Default)]
pub struct FrequencyReport {
    tags: IndexMap<String, u64>,
    values: IndexMap<String, u64>,
}

impl FrequencyReport {
    pub fn from_index(index: &DocumentIndex) -> Self {
        let mut report = Self::default();
        for record in index.records() {
            for tag_value in record.tag_value_list() {
                *report.tags.entry(tag_value.tag().to_string()).or_default() += 1;
                *report
                    .values
                    .entry(tag_value.value().to_string())
                    .or_default() += 1;
            }
        }

        report
    }

    /// Tags by descending count, ties in first-seen order.
    pub fn ranked_tags(&self) -> Vec<(&str, u64)> {
        Self::rank(&self.tags)
    }

    /// Values by descending count, ties in first-seen order.
    pub fn ranked_values(&self) -> Vec<(&str, u64)> {
        Self::rank(&self.values)
    }

    /// Persist both tables as `<item>\t<count>` lines.
    pub fn save(&self, tags_dst: &Path, values_dst: &Path) -> Result<(), Error> {
        TextSaver.save(&Self::render(&self.ranked_tags()), tags_dst)?;
        TextSaver.save(&Self::render(&self.ranked_values()), values_dst)
    }

    // itertools' sort is stable, so equal counts keep counter order
    fn rank(counter: &IndexMap<String, u64>) -> Vec<(&str, u64)> {
        counter
            .iter()
            .map(|(item, count)| (item.as_str(), *count))
            .sorted_by_key(|&(_, count)| Reverse(count))
            .collect()
    }

    fn render(ranked: &[(&str, u64)]) -> String {
        ranked
            .iter()
            .map(|(item, count)| format!("{}\t{}", item, count))
            .join("\n")
    }
}
