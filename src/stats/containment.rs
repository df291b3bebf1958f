//! Text-containment diagnostics.
use crate::types::DocumentIndex;

/// Running overlap totals between annotations and record text.
///
/// A tag or value counts as contained when it occurs as a plain substring
/// of its own record's text. Records without text keep their annotations
/// in the totals but contain nothing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContainmentReport {
    nb_tags: usize,
    nb_values: usize,
    tags_in_text: usize,
    values_in_text: usize,
}

impl ContainmentReport {
    pub fn from_index(index: &DocumentIndex) -> Self {
        let mut report = Self::default();
        for record in index.records() {
            let text = record.text().unwrap_or("");
            for tag_value in record.tag_value_list() {
                report.nb_tags += 1;
                report.nb_values += 1;
                if text.contains(tag_value.tag()) {
                    report.tags_in_text += 1;
                }
                if text.contains(tag_value.value()) {
                    report.values_in_text += 1;
                }
            }
        }

        report
    }

    pub fn nb_tags(&self) -> usize {
        self.nb_tags
    }

    pub fn nb_values(&self) -> usize {
        self.nb_values
    }

    pub fn tags_in_text(&self) -> usize {
        self.tags_in_text
    }

    pub fn values_in_text(&self) -> usize {
        self.values_in_text
    }
}

impl std::fmt::Display for ContainmentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "tags in text:   {}/{} ({:.2}%)",
            self.tags_in_text,
            self.nb_tags,
            percent(self.tags_in_text, self.nb_tags)
        )?;
        write!(
            f,
            "values in text: {}/{} ({:.2}%)",
            self.values_in_text,
            self.nb_values,
            percent(self.values_in_text, self.nb_values)
        )
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0f64;
    }
    part as f64 * 100f64 / total as f64
}

#[cfg(test)]
mod tests {
    use crate::types::{Record, TagValue};

    use super::*;

    fn line_record(doc: &str, pairs: &[(&str, &str)], text: &str) -> Record {
        Record::with_section(
            doc.to_string(),
            "section".to_string(),
            pairs
                .iter()
                .map(|(tag, value)| TagValue::new(tag.to_string(), value.to_string()))
                .collect(),
            text.to_string(),
        )
    }

    #[test]
    fn substring_containment() {
        let mut index = DocumentIndex::default();
        index.push(line_record(
            "Douai",
            &[("fondation", "930"), ("région", "Hauts-de-France")],
            "Douai est mentionnée dès 930, sa fondation est antérieure.",
        ));

        let report = ContainmentReport::from_index(&index);
        assert_eq!(report.nb_tags(), 2);
        assert_eq!(report.nb_values(), 2);
        // "fondation" appears in the text, "région" does not
        assert_eq!(report.tags_in_text(), 1);
        // "930" appears, "Hauts-de-France" does not
        assert_eq!(report.values_in_text(), 1);
    }

    #[test]
    fn textless_records_contain_nothing() {
        let mut index = DocumentIndex::default();
        index.push(Record::new(
            "Douai".to_string(),
            vec![TagValue::new("country".to_string(), "France".to_string())],
        ));

        let report = ContainmentReport::from_index(&index);
        assert_eq!(report.nb_tags(), 1);
        assert_eq!(report.nb_values(), 1);
        assert_eq!(report.tags_in_text(), 0);
        assert_eq!(report.values_in_text(), 0);
    }

    #[test]
    fn empty_index_prints_zero_rates() {
        let report = ContainmentReport::from_index(&DocumentIndex::default());
        let printed = report.to_string();
        assert!(printed.contains("0/0 (0.00%)"));
    }
}
