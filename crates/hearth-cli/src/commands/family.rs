//! Family spending command implementation.

use serde::Serialize;
use tabled::Tabled;

use hearth_analytics::family_spending;

use crate::cli::OutputFormat;
use crate::commands::{load_dataset, SourceArgs};
use crate::output::{format_amount, print_output};

#[derive(Debug, Serialize, Tabled)]
struct FamilyRow {
    #[tabled(rename = "Family ID")]
    family_id: String,
    #[tabled(rename = "Total Amount")]
    total_amount: String,
}

/// Execute the family-spending command.
pub fn execute(args: SourceArgs, format: OutputFormat) -> anyhow::Result<()> {
    let dataset = load_dataset(&args)?;

    let rows: Vec<FamilyRow> = family_spending(&dataset)
        .into_iter()
        .map(|row| FamilyRow {
            family_id: row.family_id.to_string(),
            total_amount: format_amount(row.total_amount),
        })
        .collect();

    print_output(&rows, format)
}
