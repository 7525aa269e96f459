//! Error types for the hearth core crate.
//!
//! This module defines the error type shared by dataset construction and
//! column lookup, providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for hearth core operations.
pub type HearthResult<T> = Result<T, HearthError>;

/// The main error type for dataset operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HearthError {
    /// A named column does not exist in the record schema.
    #[error("Column not found: {column}")]
    ColumnNotFound {
        /// The column name that was requested.
        column: String,
    },

    /// A record failed validation during dataset construction.
    #[error("Invalid record at row {row}: {reason}")]
    InvalidRecord {
        /// 1-based row number within the source table.
        row: usize,
        /// Description of what is invalid.
        reason: String,
    },

    /// The dataset contains no records.
    #[error("Dataset is empty")]
    EmptyDataset,

    /// A required field was missing during record construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },
}

impl HearthError {
    /// Creates a column-not-found error.
    #[must_use]
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Creates an invalid-record error for a 1-based row number.
    #[must_use]
    pub fn invalid_record(row: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            row,
            reason: reason.into(),
        }
    }

    /// Creates a missing-field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}
