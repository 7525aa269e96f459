//! Member spending command implementation.

use serde::Serialize;
use tabled::Tabled;

use hearth_analytics::member_spending;

use crate::cli::OutputFormat;
use crate::commands::{load_dataset, SourceArgs};
use crate::output::{format_amount, print_output};

#[derive(Debug, Serialize, Tabled)]
struct MemberRow {
    #[tabled(rename = "Member ID")]
    member_id: String,
    #[tabled(rename = "Total Amount")]
    total_amount: String,
}

/// Execute the member-spending command.
pub fn execute(args: SourceArgs, format: OutputFormat) -> anyhow::Result<()> {
    let dataset = load_dataset(&args)?;

    let rows: Vec<MemberRow> = member_spending(&dataset)
        .into_iter()
        .map(|row| MemberRow {
            member_id: row.member_id.to_string(),
            total_amount: format_amount(row.total_amount),
        })
        .collect();

    print_output(&rows, format)
}
