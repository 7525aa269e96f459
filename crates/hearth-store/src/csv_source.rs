//! CSV-based dataset source.

use std::path::{Path, PathBuf};

use tracing::info;

use hearth_core::{Dataset, Record};

use crate::error::{StoreError, StoreResult};

/// The header row every source file must carry, in any column order.
const REQUIRED_HEADERS: [&str; 10] = [
    "Family ID",
    "Member ID",
    "Category",
    "Amount",
    "Income",
    "Monthly Expenses",
    "Savings",
    "Loan Payments",
    "Credit Card Spending",
    "Financial Goals Met (%)",
];

/// CSV-based dataset source.
///
/// Validates the header row before reading any records, so a missing
/// column fails with the column's name rather than a row-level parse
/// error.
pub struct CsvDatasetSource {
    file_path: PathBuf,
}

impl CsvDatasetSource {
    /// Creates a source for the given file.
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Loads the full table into memory.
    pub fn load(&self) -> StoreResult<Dataset> {
        let mut reader = csv::Reader::from_path(&self.file_path).map_err(|e| {
            if e.is_io_error() {
                match e.into_kind() {
                    csv::ErrorKind::Io(io) => StoreError::Io(io),
                    other => StoreError::Csv {
                        message: format!("{:?}", other),
                        path: self.file_path.clone(),
                    },
                }
            } else {
                StoreError::Csv {
                    message: e.to_string(),
                    path: self.file_path.clone(),
                }
            }
        })?;

        let headers = reader.headers().map_err(|e| StoreError::Csv {
            message: e.to_string(),
            path: self.file_path.clone(),
        })?;
        for required in REQUIRED_HEADERS {
            if !headers.iter().any(|header| header == required) {
                return Err(StoreError::MissingColumn {
                    column: required.to_string(),
                    path: self.file_path.clone(),
                });
            }
        }

        let mut records: Vec<Record> = Vec::new();
        for result in reader.deserialize() {
            let record: Record = result.map_err(|e| StoreError::Csv {
                message: e.to_string(),
                path: self.file_path.clone(),
            })?;
            records.push(record);
        }

        let dataset = Dataset::from_records(records)?;
        info!(
            path = %self.file_path.display(),
            rows = dataset.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }
}
