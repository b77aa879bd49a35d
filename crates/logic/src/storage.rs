//! Snapshot persistence.
//!
//! The model never touches storage itself: [`crate::LogicManager`] hands a
//! [`Snapshot`] to a [`SnapshotStore`] after each record-changing command and
//! restores from one at startup.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use rhrh_core::DomainError;
use rhrh_model::sample::sample_book;
use rhrh_model::{RecordBook, Snapshot};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("data file {path} is malformed: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed file whose records cannot be stored together.
    #[error("stored records are inconsistent: {0}")]
    Invalid(#[from] DomainError),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Loads and saves whole snapshots.
pub trait SnapshotStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> StorageResult<Option<Snapshot>>;

    fn save(&self, snapshot: &Snapshot) -> StorageResult<()>;
}

/// Pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> StorageResult<Option<Snapshot>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no data file yet");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };
        let snapshot = serde_json::from_str(&text).map_err(|source| StorageError::Format {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "snapshot loaded");
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let text = serde_json::to_string_pretty(snapshot).map_err(|source| StorageError::Format {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, text).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }
}

/// Keeps the last saved snapshot in memory. Useful for tests and demos.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: RefCell<Option<Snapshot>>,
    saves: RefCell<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            saved: RefCell::new(Some(snapshot)),
            saves: RefCell::new(0),
        }
    }

    pub fn saved(&self) -> Option<Snapshot> {
        self.saved.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> StorageResult<Option<Snapshot>> {
        Ok(self.saved())
    }

    fn save(&self, snapshot: &Snapshot) -> StorageResult<()> {
        *self.saved.borrow_mut() = Some(snapshot.clone());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

/// Book to start with: the saved one, or sample records when nothing is saved.
///
/// A saved snapshot is restored atomically; if it holds duplicates the whole
/// load fails and no partial book is returned.
pub fn initial_book(store: &impl SnapshotStore) -> StorageResult<RecordBook> {
    match store.load()? {
        Some(snapshot) => Ok(RecordBook::from_snapshot(snapshot)?),
        None => {
            tracing::info!("starting with sample records");
            Ok(sample_book()?)
        }
    }
}
