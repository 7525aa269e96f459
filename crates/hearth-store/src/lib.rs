//! # Hearth Store
//!
//! Dataset I/O for the hearth family financial analytics toolkit.
//!
//! This crate owns every filesystem concern:
//!
//! - **CSV source**: loads the transactions table from a spreadsheet
//!   export, validating the header row up front
//! - **Snapshot**: persists the augmented table (base columns plus the two
//!   derived ones) as a single JSON document, so a display step can skip
//!   recomputation
//! - **Config file**: optional TOML file carrying the scoring configuration
//!
//! Loading is the only I/O-bound step in the system and completes before
//! any aggregation begins; there is no partial or streaming load.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod config;
pub mod csv_source;
pub mod error;
pub mod snapshot;

pub use config::HearthConfig;
pub use csv_source::CsvDatasetSource;
pub use error::{StoreError, StoreResult};
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};
