// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage backends.
//!
//! A backend stores opaque snapshot payloads under named slots. It knows
//! nothing about the payload format; encoding and validation live in
//! `data_models`.
//!
//! ## Backend Support
//!
//! - `memory`: in-process map, for tests and ephemeral runs
//! - `file`: one JSON file per slot inside a directory

pub mod file;
pub mod memory;

use crate::error::PersistenceError;

/// Load/save hook for snapshot payloads.
pub trait SnapshotBackend {
    /// Reads the payload stored under `slot`.
    ///
    /// Returns `Ok(None)` if nothing has been stored there yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium cannot be read.
    fn load(&self, slot: &str) -> Result<Option<String>, PersistenceError>;

    /// Replaces the payload stored under `slot`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium cannot be written.
    fn save(&mut self, slot: &str, payload: &str) -> Result<(), PersistenceError>;

    /// A short description for log output.
    fn describe(&self) -> String;
}
