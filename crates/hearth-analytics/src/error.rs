//! Error types for analytics operations.

use thiserror::Error;

use hearth_core::HearthError;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur during aggregation, correlation, or scoring.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// The health score is undefined for a row (division by zero).
    #[error("Score undefined at row {row}: {reason}")]
    ScoreUndefined {
        /// 1-based row number within the dataset.
        row: usize,
        /// Which ratio broke down and why.
        reason: String,
    },

    /// A correlation input column has zero variance.
    #[error("Correlation undefined: column '{column}' has zero variance")]
    ZeroVariance {
        /// The constant column.
        column: String,
    },

    /// The two correlation columns have different lengths.
    #[error("Column length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first column.
        left: usize,
        /// Length of the second column.
        right: usize,
    },

    /// Too few rows for the requested statistic.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required rows.
        required: usize,
        /// Actual number of rows.
        actual: usize,
    },

    /// A non-finite value reached a computation.
    #[error("Non-finite value in column '{column}' at row {row}")]
    NonFiniteValue {
        /// The offending column.
        column: String,
        /// 1-based row number.
        row: usize,
    },

    /// Error from the core dataset layer.
    #[error(transparent)]
    Core(#[from] HearthError),
}

impl AnalyticsError {
    /// Creates a score-undefined error for a 1-based row number.
    #[must_use]
    pub fn score_undefined(row: usize, reason: impl Into<String>) -> Self {
        Self::ScoreUndefined {
            row,
            reason: reason.into(),
        }
    }

    /// Creates a zero-variance error for a named column.
    #[must_use]
    pub fn zero_variance(column: impl Into<String>) -> Self {
        Self::ZeroVariance {
            column: column.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_undefined_display() {
        let err = AnalyticsError::score_undefined(4, "Income is zero");
        assert_eq!(err.to_string(), "Score undefined at row 4: Income is zero");
    }

    #[test]
    fn test_zero_variance_display() {
        let err = AnalyticsError::zero_variance("Income");
        assert!(err.to_string().contains("'Income'"));
    }
}
