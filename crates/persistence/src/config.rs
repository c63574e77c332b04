// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use crate::backend::SnapshotBackend;
use crate::backend::file::FileBackend;
use crate::backend::memory::MemoryBackend;
use crate::error::PersistenceError;
use crate::store::SnapshotStore;

/// Slot name used when none is configured.
pub const DEFAULT_SLOT: &str = "busRegistrationState";

/// Where snapshots are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// In process memory only.
    #[default]
    Memory,
    /// JSON files inside the given directory.
    File(PathBuf),
}

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// The storage backend.
    pub backend: BackendKind,
    /// The slot the snapshot is stored under.
    pub slot: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Memory,
            slot: String::from(DEFAULT_SLOT),
        }
    }
}

impl StoreConfig {
    /// An in-memory store under the default slot.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// A file-backed store in `dir` under the default slot.
    #[must_use]
    pub fn with_data_dir<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            backend: BackendKind::File(dir.into()),
            slot: String::from(DEFAULT_SLOT),
        }
    }

    /// Overrides the slot name.
    #[must_use]
    pub fn with_slot(mut self, slot: &str) -> Self {
        self.slot = slot.to_string();
        self
    }

    /// Opens the configured store, loading or seeding its state.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The slot name is blank
    /// - The backend cannot be opened or read
    pub fn open(&self) -> Result<SnapshotStore, PersistenceError> {
        if self.slot.trim().is_empty() {
            return Err(PersistenceError::InitializationError(String::from(
                "slot name cannot be empty",
            )));
        }

        let backend: Box<dyn SnapshotBackend> = match &self.backend {
            BackendKind::Memory => Box::new(MemoryBackend::new()),
            BackendKind::File(dir) => Box::new(FileBackend::new(dir)?),
        };
        SnapshotStore::open(backend, &self.slot)
    }
}
