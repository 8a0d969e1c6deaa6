use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while interpreting arguments or writing rows.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("too few values to generate anything")]
    Usage,
    #[error("unable to create or truncate file '{}': {source}", path.display())]
    FileCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
