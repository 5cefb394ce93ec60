//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] cds2ts_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generated documents cannot be written to the requested location.
    #[error("cannot write output to '{}': {message}", path.display())]
    Output {
        /// Requested output path.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates an output error for the given path.
    pub fn output(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Output {
            path: path.into(),
            message: message.into(),
        }
    }
}
