use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::invocation::RowCountSource;

/// Default output file, relative to the working directory.
pub const DEFAULT_OUT_PATH: &str = "generated.csv";
/// Default field separator.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Options for the generation engine.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// File that is truncated and filled with rows.
    pub out_path: PathBuf,
    /// Text placed between fields of a row.
    pub separator: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT_PATH),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Summary of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub rows_requested: u64,
    pub rows_written: u64,
    pub columns: usize,
    pub bytes_written: u64,
    pub row_count_source: RowCountSource,
    pub generator_usage: BTreeMap<String, u64>,
}

impl GenerationReport {
    pub fn new(rows_requested: u64, columns: usize, row_count_source: RowCountSource) -> Self {
        Self {
            rows_requested,
            rows_written: 0,
            columns,
            bytes_written: 0,
            row_count_source,
            generator_usage: BTreeMap::new(),
        }
    }

    pub fn record_generator_usage(&mut self, id: &str) {
        *self.generator_usage.entry(id.to_string()).or_insert(0) += 1;
    }

    pub fn record_row(&mut self) {
        self.rows_written += 1;
    }
}
