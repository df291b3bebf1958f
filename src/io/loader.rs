/*! Loading facilities

One loader per file format. Each loader is a capability value: callers pick
the variant matching the declared format and get a typed value back, rather
than downcasting from a shared representation.

- [TextLoader]: whole file as a single [String], with a trimmed line view.
- [CsvLoader]: comma-delimited rows, row order preserved.
- [JsonLoader]: parsed [Value], constrained by the root rule.
!*/
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::Error;

/// Typed file loading.
pub trait Loader {
    type Output;

    fn load(&self, src: &Path) -> Result<Self::Output, Error>;
}

/// Opens `src`, mapping a missing path to [Error::NotFound].
fn open_checked(src: &Path) -> Result<File, Error> {
    File::open(src).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound(src.to_path_buf()),
        _ => Error::Io(e),
    })
}

/// Whole-file string loader.
pub struct TextLoader;

impl TextLoader {
    /// Line view of the file.
    ///
    /// Lines are trimmed and lines that are empty after trimming are dropped.
    pub fn load_lines(&self, src: &Path) -> Result<Vec<String>, Error> {
        let data = self.load(src)?;
        Ok(data
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }
}

impl Loader for TextLoader {
    type Output = String;

    fn load(&self, src: &Path) -> Result<Self::Output, Error> {
        let mut bytes = Vec::new();
        open_checked(src)?.read_to_end(&mut bytes)?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Comma-delimited row loader.
pub struct CsvLoader;

impl Loader for CsvLoader {
    type Output = Vec<Vec<String>>;

    fn load(&self, src: &Path) -> Result<Self::Output, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(open_checked(src)?);

        let mut rows = Vec::new();
        for row in reader.records() {
            let row = row?;
            rows.push(row.iter().map(String::from).collect());
        }
        Ok(rows)
    }
}

/// JSON value loader.
///
/// Only two root shapes are accepted: a mapping, returned unchanged, and a
/// sequence of length one, unwrapped to its single element which must itself
/// be a mapping. Every other root fails with [Error::Schema].
pub struct JsonLoader;

impl Loader for JsonLoader {
    type Output = Value;

    fn load(&self, src: &Path) -> Result<Self::Output, Error> {
        let parsed = serde_json::from_reader(open_checked(src)?)?;
        unwrap_root(parsed)
    }
}

fn unwrap_root(value: Value) -> Result<Value, Error> {
    match value {
        Value::Object(_) => Ok(value),
        Value::Array(mut seq) => {
            if seq.len() != 1 {
                return Err(Error::Schema(format!(
                    "json sequence root should hold a single mapping, got {} elements",
                    seq.len()
                )));
            }
            match seq.pop() {
                Some(Value::Object(map)) => Ok(Value::Object(map)),
                _ => Err(Error::Schema(
                    "json sequence root should hold a single mapping".to_string(),
                )),
            }
        }
        _ => Err(Error::Schema(
            "json root should be a mapping or a sequence".to_string(),
        )),
    }
}
