//! Pipeline trait.
use crate::error::Error;

/// Implemented by every pipeline, generic over the produced value so that
/// pipelines returning an index, a report or nothing at all share one
/// calling convention.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
