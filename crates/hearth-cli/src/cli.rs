//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{HealthArgs, SnapshotArgs, SourceArgs};

/// Hearth - family financial health analytics CLI
#[derive(Parser)]
#[command(name = "hearth")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Total spending per family
    FamilySpending(SourceArgs),

    /// Total spending per member
    MemberSpending(SourceArgs),

    /// Correlations between key financial metrics
    Correlations(SourceArgs),

    /// Financial health scores (per-family maximum)
    Health(HealthArgs),

    /// Total spending per category
    CategorySpending(SourceArgs),

    /// Score the dataset and write the augmented table to a snapshot
    Snapshot(SnapshotArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the first value)
    Minimal,
}
