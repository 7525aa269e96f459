//! CLI command implementations.

pub mod categories;
pub mod correlations;
pub mod family;
pub mod health;
pub mod member;
pub mod snapshot;

// Re-export argument structs for convenience
pub use health::HealthArgs;
pub use snapshot::SnapshotArgs;

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use hearth_analytics::score::{CategoryScope, ScoreConfig, ScoreFormula, ScoredDataset};
use hearth_core::Dataset;
use hearth_store::{CsvDatasetSource, HearthConfig, Snapshot};

use crate::error::{CliError, CliResult};

/// Dataset source arguments shared by every view command.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// CSV export of the transactions table
    #[arg(short, long, conflicts_with = "snapshot")]
    pub input: Option<PathBuf>,

    /// Previously written snapshot of the scored table
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,
}

/// `--scope` flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    /// Sum over the whole table (reproduces the original behavior)
    Global,
    /// Sum within the row's family
    PerFamily,
    /// Sum within the row's member
    PerMember,
}

impl From<ScopeArg> for CategoryScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Global => CategoryScope::Global,
            ScopeArg::PerFamily => CategoryScope::PerFamily,
            ScopeArg::PerMember => CategoryScope::PerMember,
        }
    }
}

/// `--formula` flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormulaArg {
    /// The original formula, unbounded above 100
    Legacy,
    /// Clamped ratios, bounded to [0, 100]
    Normalized,
}

impl From<FormulaArg> for ScoreFormula {
    fn from(arg: FormulaArg) -> Self {
        match arg {
            FormulaArg::Legacy => ScoreFormula::Legacy,
            FormulaArg::Normalized => ScoreFormula::Normalized,
        }
    }
}

/// Scoring configuration flags.
#[derive(Args, Debug)]
pub struct ScoringArgs {
    /// Scope of the travel/entertainment spending sum
    #[arg(long, value_enum)]
    pub scope: Option<ScopeArg>,

    /// Scoring formula
    #[arg(long, value_enum)]
    pub formula: Option<FormulaArg>,

    /// TOML config file with a [scoring] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ScoringArgs {
    /// Resolves the effective config: file first, explicit flags override.
    pub fn resolve(&self) -> CliResult<ScoreConfig> {
        let mut config = match &self.config {
            Some(path) => HearthConfig::from_file(path)?.scoring,
            None => ScoreConfig::default(),
        };
        if let Some(scope) = self.scope {
            config = config.with_scope(scope.into());
        }
        if let Some(formula) = self.formula {
            config = config.with_formula(formula.into());
        }
        Ok(config)
    }

    fn first_explicit_flag(&self) -> Option<&'static str> {
        if self.scope.is_some() {
            Some("scope")
        } else if self.formula.is_some() {
            Some("formula")
        } else if self.config.is_some() {
            Some("config")
        } else {
            None
        }
    }
}

/// Loads the base dataset from whichever source was given.
pub fn load_dataset(source: &SourceArgs) -> CliResult<Dataset> {
    match (&source.input, &source.snapshot) {
        (Some(path), _) => Ok(CsvDatasetSource::new(path).load()?),
        (None, Some(path)) => {
            let scored = Snapshot::read(path)?.into_scored()?;
            Ok(scored.base_dataset()?)
        }
        (None, None) => Err(CliError::MissingSource),
    }
}

/// Loads or computes the scored table.
///
/// A CSV source is scored with the resolved config; a snapshot already
/// carries its scores, so scoring flags are rejected to avoid suggesting
/// they were applied.
pub fn load_scored(source: &SourceArgs, scoring: &ScoringArgs) -> CliResult<ScoredDataset> {
    match (&source.input, &source.snapshot) {
        (Some(path), _) => {
            let dataset = CsvDatasetSource::new(path).load()?;
            let config = scoring.resolve()?;
            Ok(ScoredDataset::compute(&dataset, &config)?)
        }
        (None, Some(path)) => {
            if let Some(flag) = scoring.first_explicit_flag() {
                return Err(CliError::FlagIgnoredForSnapshot {
                    flag: flag.to_string(),
                });
            }
            Ok(Snapshot::read(path)?.into_scored()?)
        }
        (None, None) => Err(CliError::MissingSource),
    }
}
