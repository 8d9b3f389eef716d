//! Error types for dataset parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or validating a dataset document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file at '{path}': {message}")]
    IoError {
        /// Path to the dataset file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The dataset JSON is malformed or missing required fields.
    #[error("invalid dataset JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The dataset version is not supported.
    #[error("unsupported dataset version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the document.
        actual: u32,
    },

    /// Two rows share the same identifier.
    #[error("duplicate row id {id} at index {index}")]
    DuplicateId {
        /// The repeated identifier.
        id: i64,
        /// Index of the second occurrence.
        index: usize,
    },
}
