//! Token-marked corpus conversion pipeline.
//!
//! Corpus files are line-delimited: each line holds one JSON basket,
//! its text interleaved with `@@ ` subword markers left over from
//! tokenization.
//!
//! # Processing
//! 1. The source file is read whole and split on newlines.
//! 1. Each line is scrubbed of subword markers, then blank lines are skipped.
//! 1. The remaining ones are parsed and handed to the configured normalizer.
//! 1. Records land in a [DocumentIndex], grouped by document name.
use std::path::PathBuf;

use log::{debug, info};
use serde_json::Value;

use crate::error::Error;
use crate::io::{JsonSaver, Loader, Saver, TextLoader};
use crate::normalizers::{Normalize, NormalizerKind};
use crate::pipelines::pipeline::Pipeline;
use crate::types::DocumentIndex;

/// Subword marker scrubbed from corpus lines before parsing.
const TOKEN_MARKER: &str = "@@ ";

/// Lines between two progress reports.
const PROGRESS_PERIOD: usize = 100_000;

/// Corpus conversion pipeline.
///
/// Reads a token-marked corpus file, normalizes every basket with the
/// configured [NormalizerKind] and groups the resulting records into a
/// [DocumentIndex]. If `dst` is set, the index is persisted there with
/// the usual backup protocol.
pub struct Convert {
    src: PathBuf,
    dst: Option<PathBuf>,
    normalizer: NormalizerKind,
    line_limit: Option<usize>,
}

impl Convert {
    pub fn new(
        src: PathBuf,
        dst: Option<PathBuf>,
        normalizer: NormalizerKind,
        line_limit: Option<usize>,
    ) -> Self {
        debug!("using normalizer {:?}", normalizer);
        Self {
            src,
            dst,
            normalizer,
            line_limit,
        }
    }

    /// Read the source corpus and normalize it line by line.
    ///
    /// The line limit, when set, is checked against the raw line index,
    /// before marker scrubbing and blank skipping: line `limit` itself is
    /// still processed.
    fn build_index(&self) -> Result<DocumentIndex, Error> {
        let data = TextLoader.load(&self.src)?;

        let mut index = DocumentIndex::default();
        for (idx, line) in data.split('\n').enumerate() {
            if idx % PROGRESS_PERIOD == 0 {
                info!("at line {}", idx);
            }
            if let Some(limit) = self.line_limit {
                if idx > limit {
                    info!("line limit {} reached", limit);
                    break;
                }
            }

            let line = line.replace(TOKEN_MARKER, "");
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let basket: Value = serde_json::from_str(line)?;
            index.push(self.normalizer.normalize(&basket)?);
        }

        Ok(index)
    }
}

impl Pipeline<DocumentIndex> for Convert {
    fn run(&self) -> Result<DocumentIndex, Error> {
        info!("reading corpus from {:?}", self.src);
        let index = self.build_index()?;
        info!(
            "got {} records over {} documents",
            index.nb_records(),
            index.nb_documents()
        );

        if let Some(dst) = &self.dst {
            info!("writing index to {:?}", dst);
            JsonSaver.save(&serde_json::to_value(&index)?, dst)?;
        }

        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;
    use tempfile::NamedTempFile;

    use crate::normalizers::LineNormalizer;

    use super::*;

    fn corpus(lines: &[String]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn basket(doc: &str, sec: &str, text: &str) -> String {
        json!({
            "doc_title": doc,
            "sec_title": sec,
            "data": [["fondation", "930"]],
            "text": text,
        })
        .to_string()
    }

    fn line_convert(src: &NamedTempFile, line_limit: Option<usize>) -> Convert {
        Convert::new(
            src.path().to_path_buf(),
            None,
            NormalizerKind::Line(LineNormalizer),
            line_limit,
        )
    }

    #[test]
    fn markers_are_scrubbed_everywhere() {
        let line = basket("Douai", "Histoire", "men@@ tionnée dès 930");
        let src = corpus(&[format!("@@ {}", line)]);

        let index = line_convert(&src, None).run().unwrap();
        let record = &index.get("Douai").unwrap()[0];
        assert_eq!(record.text(), Some("mentionnée dès 930"));
    }

    #[test]
    fn blank_and_marker_only_lines_are_skipped() {
        let src = corpus(&[
            String::new(),
            "   ".to_string(),
            "@@ @@ ".to_string(),
            basket("Douai", "Histoire", "texte"),
        ]);

        let index = line_convert(&src, None).run().unwrap();
        assert_eq!(index.nb_records(), 1);
    }

    #[test]
    fn records_group_by_document() {
        let src = corpus(&[
            basket("Douai", "Histoire", "a"),
            basket("Lille", "Histoire", "b"),
            basket("Douai", "Géographie", "c"),
        ]);

        let index = line_convert(&src, None).run().unwrap();
        assert_eq!(index.nb_documents(), 2);
        assert_eq!(index.get("Douai").unwrap().len(), 2);
        assert_eq!(
            index.get("Douai").unwrap()[1].section_name(),
            Some("Géographie")
        );
    }

    #[test]
    fn line_limit_is_inclusive() {
        let lines: Vec<String> = (0..10)
            .map(|i| basket(&format!("doc {}", i), "s", "t"))
            .collect();
        let src = corpus(&lines);

        let index = line_convert(&src, Some(4)).run().unwrap();
        assert_eq!(index.nb_records(), 5);
        assert!(index.get("doc 4").is_some());
        assert!(index.get("doc 5").is_none());
    }

    #[test]
    fn malformed_line_stops_the_run() {
        let src = corpus(&[basket("Douai", "Histoire", "a"), "{not json".to_string()]);

        let err = line_convert(&src, None).run().unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn missing_source_is_reported() {
        let convert = Convert::new(
            PathBuf::from("no/such/corpus.json"),
            None,
            NormalizerKind::Line(LineNormalizer),
            None,
        );

        let err = convert.run().unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
