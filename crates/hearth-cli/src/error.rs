//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// No dataset source was given.
    #[error("No dataset source: pass --input <CSV> or --snapshot <JSON>")]
    MissingSource,

    /// Scoring flags were combined with a snapshot source.
    #[error("--{flag} has no effect on a snapshot; it applies when scoring --input data")]
    FlagIgnoredForSnapshot {
        /// The offending flag name.
        flag: String,
    },

    /// Dataset loading failed.
    #[error(transparent)]
    Store(#[from] hearth_store::StoreError),

    /// Aggregation or scoring failed.
    #[error(transparent)]
    Analytics(#[from] hearth_analytics::AnalyticsError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
