//! Correlations command implementation.

use serde::Serialize;
use tabled::Tabled;

use hearth_analytics::metric_correlations;
use hearth_analytics::views::CorrelationResult;

use crate::cli::OutputFormat;
use crate::commands::{load_dataset, SourceArgs};
use crate::output::print_output;

#[derive(Debug, Serialize, Tabled)]
struct PairRow {
    #[tabled(rename = "Metric Pair")]
    pair: String,
    #[tabled(rename = "Correlation")]
    correlation: String,
}

impl PairRow {
    fn from_result(result: &CorrelationResult) -> Self {
        let correlation = match result.coefficient {
            Some(r) => format!("{:.4}", r),
            None => format!(
                "undefined ({})",
                result.note.as_deref().unwrap_or("no reason given")
            ),
        };
        Self {
            pair: format!("{} vs {}", result.x, result.y),
            correlation,
        }
    }
}

/// Execute the correlations command.
///
/// JSON output carries the full report including the underlying columns
/// (for scatter rendering); the other formats show the two coefficients.
pub fn execute(args: SourceArgs, format: OutputFormat) -> anyhow::Result<()> {
    let dataset = load_dataset(&args)?;
    let report = metric_correlations(&dataset)?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let rows = vec![
        PairRow::from_result(&report.income_vs_expenses),
        PairRow::from_result(&report.savings_vs_credit),
    ];
    print_output(&rows, format)
}
