//! Error types for dataset I/O.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while loading or persisting data.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required column is missing from the CSV header row.
    #[error("Column not found in {path}: {column}")]
    MissingColumn {
        /// The missing header name.
        column: String,
        /// The file that lacks it.
        path: PathBuf,
    },

    /// CSV parsing or deserialization failed.
    #[error("CSV error in {path}: {message}")]
    Csv {
        /// Description of the failure.
        message: String,
        /// The offending file.
        path: PathBuf,
    },

    /// Snapshot serialization, deserialization, or version check failed.
    #[error("Snapshot error: {message}")]
    Snapshot {
        /// Description of the failure.
        message: String,
    },

    /// The snapshot was written by an incompatible format version.
    #[error("Snapshot version mismatch: expected {expected}, found {found}")]
    SnapshotVersion {
        /// Version this build writes and reads.
        expected: u32,
        /// Version found in the file.
        found: u32,
    },

    /// Config file parsing failed.
    #[error("Config error in {path}: {message}")]
    Config {
        /// Description of the failure.
        message: String,
        /// The offending file.
        path: PathBuf,
    },

    /// The loaded rows failed dataset validation.
    #[error(transparent)]
    Dataset(#[from] hearth_core::HearthError),
}

impl StoreError {
    /// Creates a snapshot error.
    #[must_use]
    pub fn snapshot(message: impl Into<String>) -> Self {
        Self::Snapshot {
            message: message.into(),
        }
    }
}
