//! Hearth CLI - view selection for family financial analytics.
//!
//! # Usage
//!
//! ```bash
//! # Family-level spending totals
//! hearth family-spending --input transactions.csv
//!
//! # Health scores with the per-family category scope
//! hearth health --input transactions.csv --scope per-family
//!
//! # Score once, render later from the snapshot
//! hearth snapshot --input transactions.csv --output scored.json
//! hearth health --snapshot scored.json
//!
//! # Machine-readable output
//! hearth category-spending --input transactions.csv --format json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let format = cli.format;

    match cli.command {
        Commands::FamilySpending(args) => commands::family::execute(args, format)?,
        Commands::MemberSpending(args) => commands::member::execute(args, format)?,
        Commands::Correlations(args) => commands::correlations::execute(args, format)?,
        Commands::Health(args) => commands::health::execute(args, format)?,
        Commands::CategorySpending(args) => commands::categories::execute(args, format)?,
        Commands::Snapshot(args) => commands::snapshot::execute(args)?,
    }

    Ok(())
}
