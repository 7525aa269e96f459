//! Optional TOML configuration file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use hearth_analytics::score::ScoreConfig;

use crate::error::{StoreError, StoreResult};

/// Top-level configuration file contents.
///
/// ```toml
/// [scoring]
/// category_scope = "per-family"
/// formula = "legacy"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HearthConfig {
    /// Scoring configuration.
    #[serde(default)]
    pub scoring: ScoreConfig,
}

impl HearthConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| StoreError::Config {
            message: e.to_string(),
            path: path.to_path_buf(),
        })
    }
}
