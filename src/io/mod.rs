/*!
# IO utilities

Format-polymorphic loading and saving.

Loaders and savers come in matched pairs per format, so that the backup
protocol can reread a file exactly the way it is about to be rewritten.
!*/
pub mod loader;
pub mod saver;

pub use loader::{CsvLoader, JsonLoader, Loader, TextLoader};
pub use saver::{JsonSaver, Saver, TextSaver};
