//! Error types for catalog records and files.
//!
//! Scraping and configuration errors live in their own crates. A unified
//! error is deferred to `hoard-cli` where all crate errors converge.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, validating, or writing catalog files.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Reading or writing a catalog file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog file is not valid JSON, or could not be serialized.
    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Data failed validation (shape of the document, field types).
    #[error("Validation error: {0}")]
    Validation(String),
}
