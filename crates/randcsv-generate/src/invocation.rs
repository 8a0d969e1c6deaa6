use std::sync::LazyLock;

use rand::{Rng, RngCore};
use regex::Regex;

use crate::errors::GenerationError;
use crate::kinds::ColumnKind;

/// Bounds (inclusive) of the row count drawn when none is given.
pub const RANDOM_ROWS_MIN: u64 = 1;
pub const RANDOM_ROWS_MAX: u64 = 30;

static HELP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^-{0,2}help$").unwrap_or_else(|err| panic!("invalid help pattern: {err}"))
});

/// Where the row count of a request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowCountSource {
    Explicit,
    Randomized,
}

/// Rows and columns to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub rows: u64,
    pub row_count_source: RowCountSource,
    pub columns: Vec<ColumnKind>,
}

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Generate(GenerationRequest),
}

pub fn is_help_token(token: &str) -> bool {
    HELP_PATTERN.is_match(token)
}

/// Interpret the process arguments (program name excluded).
///
/// A leading integer is consumed as the row count. Without one, every
/// argument is a column token and the row count is drawn from `rng`.
pub fn interpret_args<S: AsRef<str>>(
    args: &[S],
    rng: &mut dyn RngCore,
) -> Result<Invocation, GenerationError> {
    let Some(first) = args.first() else {
        return Err(GenerationError::Usage);
    };
    let first = first.as_ref();

    if args.len() == 1 && is_help_token(first) {
        return Ok(Invocation::Help);
    }

    let request = match first.parse::<u64>() {
        Ok(rows) => GenerationRequest {
            rows,
            row_count_source: RowCountSource::Explicit,
            columns: ColumnKind::parse_all(&args[1..]),
        },
        Err(_) => GenerationRequest {
            rows: rng.random_range(RANDOM_ROWS_MIN..=RANDOM_ROWS_MAX),
            row_count_source: RowCountSource::Randomized,
            columns: ColumnKind::parse_all(args),
        },
    };

    Ok(Invocation::Generate(request))
}
