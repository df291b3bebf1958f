/*! Canonical corpus types.

* !*/
mod index;
mod record;

pub use index::DocumentIndex;
pub use record::Record;
pub use record::TagValue;
