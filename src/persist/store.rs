//! Snapshot stores.
//!
//! A store keeps two independent values: the live session snapshot and the
//! history ledger. Every write replaces the whole value.
//!
//! - [`MemoryStore`]: keeps encoded JSON in memory (tests, embedding).
//! - [`FileStore`]: one file per value, JSON or bincode, replaced atomically.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::snapshot::SessionSnapshot;
use crate::core::config::{SnapshotFormat, StorageConfig};
use crate::history::HistoryLedger;

/// Store read/write failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
}

/// Persistence capability injected into the game.
pub trait SnapshotStore {
    /// Load the saved session, `Ok(None)` if nothing is saved.
    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError>;

    /// Replace the saved session.
    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), StoreError>;

    /// Forget the saved session.
    fn clear(&mut self) -> Result<(), StoreError>;

    /// Load the history ledger, empty if nothing is saved.
    fn load_history(&self) -> Result<HistoryLedger, StoreError>;

    /// Replace the saved history ledger.
    fn save_history(&mut self, ledger: &HistoryLedger) -> Result<(), StoreError>;

    /// Move an unreadable ledger out of the way so the next
    /// [`SnapshotStore::save_history`] cannot overwrite it.
    fn set_aside_history(&mut self) -> Result<(), StoreError>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for Box<S> {
    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        (**self).save(snapshot)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        (**self).clear()
    }

    fn load_history(&self) -> Result<HistoryLedger, StoreError> {
        (**self).load_history()
    }

    fn save_history(&mut self, ledger: &HistoryLedger) -> Result<(), StoreError> {
        (**self).save_history(ledger)
    }

    fn set_aside_history(&mut self) -> Result<(), StoreError> {
        (**self).set_aside_history()
    }
}

/// In-memory store holding the JSON text a key-value store would hold.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    session: Option<String>,
    history: Option<String>,
    history_backup: Option<String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw saved session text.
    #[must_use]
    pub fn session_json(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// Raw saved ledger text.
    #[must_use]
    pub fn history_json(&self) -> Option<&str> {
        self.history.as_deref()
    }

    /// Ledger text moved aside by [`SnapshotStore::set_aside_history`].
    #[must_use]
    pub fn history_backup(&self) -> Option<&str> {
        self.history_backup.as_deref()
    }

    /// Overwrite the raw session text (e.g. with something corrupted).
    pub fn set_session_json(&mut self, json: impl Into<String>) {
        self.session = Some(json.into());
    }

    /// Overwrite the raw ledger text.
    pub fn set_history_json(&mut self, json: impl Into<String>) {
        self.history = Some(json.into());
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        self.session
            .as_deref()
            .map(|json| serde_json::from_str(json))
            .transpose()
            .map_err(StoreError::from)
    }

    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        self.session = Some(serde_json::to_string(snapshot)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.session = None;
        Ok(())
    }

    fn load_history(&self) -> Result<HistoryLedger, StoreError> {
        match self.history.as_deref() {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(HistoryLedger::new()),
        }
    }

    fn save_history(&mut self, ledger: &HistoryLedger) -> Result<(), StoreError> {
        self.history = Some(serde_json::to_string(ledger)?);
        Ok(())
    }

    fn set_aside_history(&mut self) -> Result<(), StoreError> {
        if let Some(json) = self.history.take() {
            self.history_backup = Some(json);
        }
        Ok(())
    }
}

/// File-backed store.
#[derive(Clone, Debug)]
pub struct FileStore {
    session_path: PathBuf,
    history_path: PathBuf,
    history_backup_path: PathBuf,
    format: SnapshotFormat,
}

impl FileStore {
    /// Store laid out per `config`. The directory is created on first write.
    #[must_use]
    pub fn new(config: &StorageConfig) -> Self {
        let history_path = config.history_path();
        let mut backup = history_path.clone().into_os_string();
        backup.push(".bak");
        Self {
            session_path: config.session_path(),
            history_path,
            history_backup_path: PathBuf::from(backup),
            format: config.format,
        }
    }

    #[must_use]
    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    #[must_use]
    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    /// Where an unreadable ledger is moved; replaced on each move.
    #[must_use]
    pub fn history_backup_path(&self) -> &Path {
        &self.history_backup_path
    }

    fn read<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>, StoreError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let value = match self.format {
            SnapshotFormat::Json => serde_json::from_slice(&bytes)?,
            SnapshotFormat::Bincode => bincode::deserialize(&bytes)?,
        };
        Ok(Some(value))
    }

    fn write<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        let bytes = match self.format {
            SnapshotFormat::Json => serde_json::to_vec_pretty(value)?,
            SnapshotFormat::Bincode => bincode::serialize(value)?,
        };
        let io_err = |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, &bytes).map_err(io_err)?;
        fs::rename(&tmp, path).map_err(io_err)?;

        debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        self.read(&self.session_path)
    }

    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        self.write(&self.session_path, snapshot)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.session_path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(StoreError::Io {
                path: self.session_path.clone(),
                source: e,
            }),
            _ => Ok(()),
        }
    }

    fn load_history(&self) -> Result<HistoryLedger, StoreError> {
        Ok(self.read(&self.history_path)?.unwrap_or_default())
    }

    fn save_history(&mut self, ledger: &HistoryLedger) -> Result<(), StoreError> {
        self.write(&self.history_path, ledger)
    }

    fn set_aside_history(&mut self) -> Result<(), StoreError> {
        match fs::rename(&self.history_path, &self.history_backup_path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(StoreError::Io {
                path: self.history_path.clone(),
                source: e,
            }),
            _ => {
                debug!("moved history aside to {}", self.history_backup_path.display());
                Ok(())
            }
        }
    }
}
