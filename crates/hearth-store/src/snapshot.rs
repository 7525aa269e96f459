//! JSON snapshot of the augmented table.
//!
//! The snapshot hands the scored table from a compute step to a display
//! step: written once after scoring, read once before display. It carries
//! the full augmented table (base columns plus the two derived ones), the
//! scoring configuration that produced it, and a format version.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use hearth_analytics::score::{ScoreConfig, ScoredDataset, ScoredRow};

use crate::error::{StoreError, StoreResult};

/// Snapshot format version this build writes and reads.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A serialized copy of the augmented table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Format version.
    pub version: u32,

    /// When the snapshot was written.
    pub created_at: DateTime<Utc>,

    /// The scoring configuration the rows were computed with.
    pub config: ScoreConfig,

    /// The augmented rows, in load order.
    pub rows: Vec<ScoredRow>,
}

impl Snapshot {
    /// Wraps a scored dataset for persistence.
    #[must_use]
    pub fn new(scored: &ScoredDataset, config: ScoreConfig) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            created_at: Utc::now(),
            config,
            rows: scored.rows().to_vec(),
        }
    }

    /// Writes the snapshot as a single JSON document.
    pub fn write(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self)
            .map_err(|e| StoreError::snapshot(e.to_string()))?;
        writer.into_inner().map_err(|e| StoreError::Io(e.into_error()))?;
        info!(path = %path.display(), rows = self.rows.len(), "wrote snapshot");
        Ok(())
    }

    /// Reads a snapshot, checking the format version.
    pub fn read(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| StoreError::snapshot(e.to_string()))?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StoreError::SnapshotVersion {
                expected: SNAPSHOT_VERSION,
                found: snapshot.version,
            });
        }
        info!(path = %path.display(), rows = snapshot.rows.len(), "read snapshot");
        Ok(snapshot)
    }

    /// Unwraps the augmented table.
    pub fn into_scored(self) -> StoreResult<ScoredDataset> {
        ScoredDataset::from_rows(self.rows)
            .map_err(|e| StoreError::snapshot(e.to_string()))
    }
}
