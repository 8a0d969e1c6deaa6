use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use chrono::NaiveDateTime;
use rand::RngCore;
use tracing::{info, warn};

use crate::errors::GenerationError;
use crate::generators::{GeneratorContext, generate_row};
use crate::invocation::GenerationRequest;
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::lines::LineWriter;

/// Source of the timestamp used by date columns.
pub type Clock = fn() -> NaiveDateTime;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_path: PathBuf,
    pub report: GenerationReport,
}

/// Writes generated rows to the configured output file.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
    clock: Clock,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self::with_clock(options, local_now)
    }

    pub fn with_clock(options: GenerateOptions, clock: Clock) -> Self {
        Self { options, clock }
    }

    /// Truncate the output file and fill it with `request.rows` rows.
    pub fn run(
        &self,
        request: &GenerationRequest,
        rng: &mut dyn RngCore,
    ) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let out_path = self.options.out_path.clone();
        let file = File::create(&out_path).map_err(|source| GenerationError::FileCreation {
            path: out_path.clone(),
            source,
        })?;

        info!(
            path = %out_path.display(),
            rows = request.rows,
            columns = request.columns.len(),
            row_count_source = ?request.row_count_source,
            "generation started"
        );

        let report = self.write_rows(file, request, rng)?;

        info!(
            path = %out_path.display(),
            rows = report.rows_written,
            bytes = report.bytes_written,
            duration_ms = start.elapsed().as_millis() as u64,
            "generation finished"
        );

        Ok(GenerationResult { out_path, report })
    }

    /// Write `request.rows` rows into `sink`.
    pub fn write_rows<W: Write>(
        &self,
        sink: W,
        request: &GenerationRequest,
        rng: &mut dyn RngCore,
    ) -> Result<GenerationReport, GenerationError> {
        if request.columns.is_empty() && request.rows > 0 {
            warn!(rows = request.rows, "no column tokens given, rows will be empty");
        }

        let mut report = GenerationReport::new(
            request.rows,
            request.columns.len(),
            request.row_count_source,
        );
        let mut writer = LineWriter::new(sink);

        for _ in 0..request.rows {
            let ctx = GeneratorContext { now: (self.clock)() };
            let line = generate_row(&request.columns, &self.options.separator, &ctx, rng);
            writer.write_line(&line)?;
            report.record_row();
            for kind in &request.columns {
                report.record_generator_usage(kind.id());
            }
        }

        report.bytes_written = writer.finish()?;
        Ok(report)
    }
}

fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Seed derived from the current wall clock, in nanoseconds.
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
