// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;
use tracing::debug;

use super::SnapshotBackend;
use crate::error::PersistenceError;

/// Keeps payloads in process memory. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slots: HashMap<String, String>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend with `payload` already stored under `slot`.
    #[must_use]
    pub fn with_payload(slot: &str, payload: &str) -> Self {
        let mut slots: HashMap<String, String> = HashMap::new();
        slots.insert(slot.to_string(), payload.to_string());
        Self { slots }
    }
}

impl SnapshotBackend for MemoryBackend {
    fn load(&self, slot: &str) -> Result<Option<String>, PersistenceError> {
        debug!("Reading in-memory slot '{}'", slot);
        Ok(self.slots.get(slot).cloned())
    }

    fn save(&mut self, slot: &str, payload: &str) -> Result<(), PersistenceError> {
        debug!("Writing {} bytes to in-memory slot '{}'", payload.len(), slot);
        self.slots.insert(slot.to_string(), payload.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        String::from("memory")
    }
}
