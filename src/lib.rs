pub mod error;
pub mod io;
pub mod normalizers;
pub mod pipelines;
pub mod stats;
pub mod types;
