//! Game configuration.
//!
//! The rules are fixed and live in [`rules`]. `GameConfig` only carries what
//! varies between deployments: the RNG seed and where snapshots are stored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Fixed rule constants.
pub mod rules {
    /// Dice per roll.
    pub const DICE_COUNT: usize = 5;
    /// Rolls available at the start of each turn.
    pub const ROLLS_PER_TURN: u8 = 3;
    /// Rounds in a full game.
    pub const ROUNDS: u32 = 13;
    /// Smallest roster.
    pub const MIN_PLAYERS: usize = 2;
    /// Largest roster.
    pub const MAX_PLAYERS: usize = 4;
    /// Upper total needed for the bonus.
    pub const UPPER_BONUS_THRESHOLD: u32 = 63;
    /// Bonus awarded at or above the threshold.
    pub const UPPER_BONUS: u32 = 35;

    pub const FULL_HOUSE_SCORE: u32 = 25;
    pub const SMALL_STRAIGHT_SCORE: u32 = 30;
    pub const LARGE_STRAIGHT_SCORE: u32 = 40;
    pub const YAHTZEE_SCORE: u32 = 50;
}

/// On-disk encoding for snapshots and the history ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotFormat {
    /// Human-readable JSON matching the documented schema.
    #[default]
    Json,
    /// Compact bincode.
    Bincode,
}

/// Where a file-backed store keeps its data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding both files.
    pub dir: PathBuf,
    /// Live session snapshot file name.
    pub session_file: String,
    /// History ledger file name.
    pub history_file: String,
    pub format: SnapshotFormat,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            session_file: "yahtzee_state".to_string(),
            history_file: "yahtzee_history".to_string(),
            format: SnapshotFormat::Json,
        }
    }
}

impl StorageConfig {
    /// Full path of the session snapshot.
    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        self.dir.join(self.file_name(&self.session_file))
    }

    /// Full path of the history ledger.
    #[must_use]
    pub fn history_path(&self) -> PathBuf {
        self.dir.join(self.file_name(&self.history_file))
    }

    fn file_name(&self, stem: &str) -> String {
        match self.format {
            SnapshotFormat::Json => format!("{stem}.json"),
            SnapshotFormat::Bincode => format!("{stem}.bin"),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// File store settings.
    pub storage: StorageConfig,
}

/// Failure to read a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GameConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Store files under `dir`.
    #[must_use]
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage.dir = dir.into();
        self
    }

    /// Choose the on-disk encoding.
    #[must_use]
    pub fn with_format(mut self, format: SnapshotFormat) -> Self {
        self.storage.format = format;
        self
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
