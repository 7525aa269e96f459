//! Health score command implementation.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use hearth_analytics::health_scores;

use crate::cli::OutputFormat;
use crate::commands::{load_scored, ScoringArgs, SourceArgs};
use crate::output::{format_amount, print_header, print_output};

/// Arguments for the health command.
#[derive(Args, Debug)]
pub struct HealthArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub scoring: ScoringArgs,
}

#[derive(Debug, Serialize, Tabled)]
struct ScoreRow {
    #[tabled(rename = "Family ID")]
    family_id: String,
    #[tabled(rename = "Financial Health Score")]
    max_score: String,
}

/// Execute the health command.
///
/// JSON output carries the full report including the per-row score column
/// (for histogram rendering); the other formats show the per-family
/// maxima.
pub fn execute(args: HealthArgs, format: OutputFormat) -> anyhow::Result<()> {
    let scored = load_scored(&args.source, &args.scoring)?;
    let report = health_scores(&scored);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if format == OutputFormat::Table {
        print_header("Family Financial Health Scores");
    }

    let rows: Vec<ScoreRow> = report
        .family_scores
        .into_iter()
        .map(|row| ScoreRow {
            family_id: row.family_id.to_string(),
            max_score: format_amount(row.max_score),
        })
        .collect();

    print_output(&rows, format)
}
