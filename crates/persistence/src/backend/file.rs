// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! File-backed slots.
//!
//! Each slot is stored as `<dir>/<slot>.json`. Writes go to a sibling
//! temporary file which is then renamed over the target, so a reader never
//! sees a half-written snapshot.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::SnapshotBackend;
use crate::error::PersistenceError;

/// Stores each slot as a JSON file in one directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Opens a file backend rooted at `dir`, creating the directory if needed.
    ///
    /// # Arguments
    ///
    /// * `dir` - The directory holding the slot files
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self, PersistenceError> {
        let dir: PathBuf = dir.as_ref().to_path_buf();
        info!("Opening snapshot directory at: {}", dir.display());
        fs::create_dir_all(&dir).map_err(|err| {
            PersistenceError::InitializationError(format!(
                "cannot create {}: {err}",
                dir.display()
            ))
        })?;
        Ok(Self { dir })
    }

    /// Returns the path of the file holding `slot`.
    #[must_use]
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl SnapshotBackend for FileBackend {
    fn load(&self, slot: &str) -> Result<Option<String>, PersistenceError> {
        let path: PathBuf = self.slot_path(slot);
        debug!("Reading snapshot file {}", path.display());
        match fs::read(&path) {
            // Undecodable bytes are handed on so the store treats them as a
            // corrupt snapshot rather than an I/O failure.
            Ok(bytes) => Ok(Some(String::from_utf8(bytes).unwrap_or_else(|err| {
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }))),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, slot: &str, payload: &str) -> Result<(), PersistenceError> {
        let path: PathBuf = self.slot_path(slot);
        let staging: PathBuf = self.dir.join(format!(".{slot}.json.tmp"));
        debug!("Writing {} bytes to {}", payload.len(), path.display());
        fs::write(&staging, payload)?;
        fs::rename(&staging, &path)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file:{}", self.dir.display())
    }
}
