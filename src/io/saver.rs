/*! Saving facilities

Savers mirror the loaders: one capability value per format, sharing the
backup protocol through the [Saver] trait.

Saving to a path that already holds a file never destroys its content in
place: the previous content is reloaded in the same format and written to the
first free backup slot (`name.1.ext`, `name.2.ext`, ...) before the new value
lands. Slot probing is bounded; past the bound the last probed slot is reused
and its content overwritten, which keeps long-running setups going at the
price of the oldest backup.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::Error;
use crate::io::loader::{JsonLoader, Loader, TextLoader};

/// Upper bound on backup slot probing.
const BACKUP_PROBE_LIMIT: usize = 100;

/// Typed file saving with backup-on-overwrite.
pub trait Saver {
    type Value;

    /// Validate `val` against this saver's format.
    fn check(&self, val: &Self::Value) -> Result<(), Error>;

    /// Write `val` at `dst`, without looking at what is already there.
    fn write(&self, val: &Self::Value, dst: &Path) -> Result<(), Error>;

    /// Reload the current content of `dst` in this saver's format.
    fn reload(&self, dst: &Path) -> Result<Self::Value, Error>;

    /// Save `val` at `dst`.
    ///
    /// When `dst` is already a file, its content is first written to the next
    /// free backup slot. At most one backup is created per call.
    fn save(&self, val: &Self::Value, dst: &Path) -> Result<(), Error> {
        self.check(val)?;
        if dst.is_file() {
            let previous = self.reload(dst)?;
            let slot = backup_slot(dst);
            debug!("backing up {:?} into {:?}", dst, slot);
            self.write(&previous, &slot)?;
        }
        self.write(val, dst)
    }
}

/// Inserts a backup index before the extension: `name.ext` into `name.1.ext`.
///
/// The split happens on the last `.` of the whole path string; a path without
/// any dot gets the tail prepended.
fn add_tail(dst: &Path, index: usize) -> PathBuf {
    let raw = dst.to_string_lossy();
    match raw.rsplit_once('.') {
        Some((stem, ext)) => PathBuf::from(format!("{}.{}.{}", stem, index, ext)),
        None => PathBuf::from(format!(".{}.{}", index, raw)),
    }
}

/// First free backup slot for `dst`.
///
/// Probing stops at [BACKUP_PROBE_LIMIT]; when every slot up to the limit is
/// taken, the last probed slot is returned anyway and its content will be
/// overwritten by the caller.
fn backup_slot(dst: &Path) -> PathBuf {
    let mut slot = add_tail(dst, 1);
    for index in 2..=BACKUP_PROBE_LIMIT {
        if !slot.is_file() {
            return slot;
        }
        slot = add_tail(dst, index);
    }
    if slot.is_file() {
        warn!(
            "backup slots exhausted for {:?}: overwriting {:?}",
            dst, slot
        );
    }
    slot
}

/// Text saver. The value is written trimmed, with a single trailing newline.
pub struct TextSaver;

impl Saver for TextSaver {
    type Value = String;

    fn check(&self, _val: &String) -> Result<(), Error> {
        // the value type already guarantees a string
        Ok(())
    }

    fn write(&self, val: &String, dst: &Path) -> Result<(), Error> {
        let mut file = File::create(dst)?;
        writeln!(file, "{}", val.trim())?;
        Ok(())
    }

    fn reload(&self, dst: &Path) -> Result<String, Error> {
        TextLoader.load(dst)
    }
}

/// JSON saver.
///
/// Output is pretty-printed with 4-space indentation, keys in insertion
/// order and non-ASCII characters emitted literally.
pub struct JsonSaver;

impl Saver for JsonSaver {
    type Value = Value;

    fn check(&self, val: &Value) -> Result<(), Error> {
        if val.is_object() || val.is_array() {
            Ok(())
        } else {
            Err(Error::TypeMismatch(
                "json saving expects a mapping or a sequence".to_string(),
            ))
        }
    }

    fn write(&self, val: &Value, dst: &Path) -> Result<(), Error> {
        let file = File::create(dst)?;
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(BufWriter::new(file), formatter);
        val.serialize(&mut serializer)?;
        serializer.into_inner().flush()?;
        Ok(())
    }

    fn reload(&self, dst: &Path) -> Result<Value, Error> {
        JsonLoader.load(dst)
    }
}
