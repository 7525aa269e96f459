//! Category spending command implementation.

use serde::Serialize;
use tabled::Tabled;

use hearth_analytics::category_spending_totals;

use crate::cli::OutputFormat;
use crate::commands::{load_dataset, SourceArgs};
use crate::output::{format_amount, print_output};

#[derive(Debug, Serialize, Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total Amount")]
    total_amount: String,
}

/// Execute the category-spending command.
pub fn execute(args: SourceArgs, format: OutputFormat) -> anyhow::Result<()> {
    let dataset = load_dataset(&args)?;

    let rows: Vec<CategoryRow> = category_spending_totals(&dataset)
        .into_iter()
        .map(|row| CategoryRow {
            category: row.category.to_string(),
            total_amount: format_amount(row.total_amount),
        })
        .collect();

    print_output(&rows, format)
}
