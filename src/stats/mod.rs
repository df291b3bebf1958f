//! Corpus statistics.
//!
//! Two independent reports over a [crate::types::DocumentIndex]:
//! tag/value frequency tables that are persisted as tab-separated text,
//! and a text-containment summary meant for printing.
pub mod containment;
pub mod frequency;

pub use containment::ContainmentReport;
pub use frequency::FrequencyReport;
