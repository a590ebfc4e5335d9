//! Error types raised by court-core.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `BoardError`) live in their
//! respective crates. `anyhow` is reserved for the `court-cli` binary where all
//! crate errors converge.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the bundled draft dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("Failed to read dataset at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not a JSON document of the expected shape.
    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
}
