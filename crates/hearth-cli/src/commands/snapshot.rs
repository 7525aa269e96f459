//! Snapshot command implementation.
//!
//! Scores the dataset once and writes the augmented table, so later view
//! commands can render without recomputing.

use std::path::PathBuf;

use clap::Args;

use hearth_analytics::score::ScoredDataset;
use hearth_store::{CsvDatasetSource, Snapshot};

use crate::commands::ScoringArgs;
use crate::output::print_success;

/// Arguments for the snapshot command.
#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// CSV export of the transactions table
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write the snapshot
    #[arg(short, long)]
    pub output: PathBuf,

    #[command(flatten)]
    pub scoring: ScoringArgs,
}

/// Execute the snapshot command.
pub fn execute(args: SnapshotArgs) -> anyhow::Result<()> {
    let dataset = CsvDatasetSource::new(&args.input).load()?;
    let config = args.scoring.resolve()?;
    let scored = ScoredDataset::compute(&dataset, &config)?;

    Snapshot::new(&scored, config).write(&args.output)?;
    print_success(&format!(
        "Scored {} rows and wrote {}",
        scored.len(),
        args.output.display()
    ));
    Ok(())
}
