//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait that enables easy
//! and flexible pipeline creation, along with the [Convert] pipeline that
//! turns token-marked corpus files into a [crate::types::DocumentIndex].
pub mod convert;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use convert::Convert;
pub use pipeline::Pipeline;
