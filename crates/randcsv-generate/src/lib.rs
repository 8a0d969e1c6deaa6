//! Random CSV row generation for randcsv.
//!
//! This crate turns a list of column-type tokens into rows of synthetic
//! values and writes them, one per line, into a flat delimited file.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod invocation;
pub mod kinds;
pub mod model;
pub mod output;

pub use engine::{GenerationEngine, GenerationResult, seed_from_clock};
pub use errors::GenerationError;
pub use invocation::{GenerationRequest, Invocation, RowCountSource, interpret_args};
pub use kinds::ColumnKind;
pub use model::{GenerateOptions, GenerationReport};
