use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading tokens or writing the generated stylesheets.
#[derive(Debug, Error)]
pub enum ColorsError {
    /// The output directory could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// A generated file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// A token, config, or previously generated file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Wraps JSON deserialization issues.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}
