// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The snapshot store.
//!
//! The store exclusively owns the current [`State`]. Callers read through
//! [`SnapshotStore::read`] and change state only by committing a complete
//! replacement, normally through [`SnapshotStore::transact`].
//!
//! ## Rules (Authoritative)
//!
//! - A commit is visible to the next `read` immediately, whether or not the
//!   save to the backend succeeded.
//! - A failed save is logged and marks the store dirty. `flush` retries it.
//! - A stored payload that does not parse, or parses but breaks a state
//!   invariant, is replaced by the seed state. Startup never fails on it.
//! - A backend that cannot be read at all fails startup, so a transient I/O
//!   error never causes stored data to be overwritten by the seed.

use rideboard::{State, TransitionResult};
use rideboard_audit::AuditEvent;
use tracing::{debug, error, info, warn};

use crate::backend::SnapshotBackend;
use crate::data_models::{decode_snapshot, encode_snapshot};
use crate::error::PersistenceError;
use crate::seed::seed_state;

/// Owner of the current state and its persisted copy.
pub struct SnapshotStore {
    state: State,
    backend: Box<dyn SnapshotBackend>,
    slot: String,
    revision: u64,
    dirty: bool,
}

impl std::fmt::Debug for SnapshotStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotStore")
            .field("backend", &self.backend.describe())
            .field("slot", &self.slot)
            .field("revision", &self.revision)
            .field("dirty", &self.dirty)
            .field("summary", &self.state.summary())
            .finish_non_exhaustive()
    }
}

impl SnapshotStore {
    /// Opens a store over `backend`, loading the snapshot in `slot`.
    ///
    /// If the slot is empty or holds a corrupt payload, the store starts from
    /// the seed state and saves it.
    ///
    /// # Arguments
    ///
    /// * `backend` - The storage backend
    /// * `slot` - The slot name the snapshot lives under
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    pub fn open(backend: Box<dyn SnapshotBackend>, slot: &str) -> Result<Self, PersistenceError> {
        info!(
            "Opening snapshot store on {} (slot '{}')",
            backend.describe(),
            slot
        );

        let (state, seeded): (State, bool) = match backend.load(slot)? {
            Some(payload) => match decode_snapshot(&payload) {
                Ok(state) => {
                    info!("Loaded snapshot: {}", state.summary());
                    (state, false)
                }
                Err(err) => {
                    warn!(
                        "Stored snapshot in slot '{}' is unusable, starting from defaults: {}",
                        slot, err
                    );
                    (seed_state(), true)
                }
            },
            None => {
                info!("No snapshot in slot '{}', seeding default routes", slot);
                (seed_state(), true)
            }
        };

        let mut store: Self = Self {
            state,
            backend,
            slot: slot.to_string(),
            revision: 0,
            dirty: seeded,
        };
        if seeded {
            store.persist();
        }
        Ok(store)
    }

    /// Returns the current state.
    #[must_use]
    pub const fn read(&self) -> &State {
        &self.state
    }

    /// Returns the number of commits since the store was opened.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns true if the last commit has not reached the backend.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the slot this store persists to.
    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Returns the storage backend.
    #[must_use]
    pub fn backend(&self) -> &dyn SnapshotBackend {
        self.backend.as_ref()
    }

    /// Replaces the current state and persists it.
    ///
    /// The new state is visible immediately. A failed save is logged and
    /// leaves the store dirty.
    pub fn commit(&mut self, next: State) {
        self.state = next;
        self.revision += 1;
        debug!("Committed revision {}: {}", self.revision, self.state.summary());
        self.persist();
    }

    /// Runs one read-modify-write transition against the current state.
    ///
    /// The closure sees the current state. Only a successful transition is
    /// committed; an error leaves the state untouched.
    ///
    /// # Returns
    ///
    /// The audit event of the committed transition.
    ///
    /// # Errors
    ///
    /// Returns whatever error the transition produced.
    pub fn transact<E, F>(&mut self, transition: F) -> Result<AuditEvent, E>
    where
        F: FnOnce(&State) -> Result<TransitionResult, E>,
    {
        let TransitionResult {
            new_state,
            audit_event,
        } = transition(&self.state)?;

        info!(
            "{} by {}: {}",
            audit_event.action.name,
            audit_event.actor.id,
            audit_event.action.details.as_deref().unwrap_or_default()
        );
        self.commit(new_state);
        Ok(audit_event)
    }

    /// Writes the current state to the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails. The
    /// store stays dirty in that case.
    pub fn flush(&mut self) -> Result<(), PersistenceError> {
        let payload: String = encode_snapshot(&self.state)?;
        self.backend.save(&self.slot, &payload)?;
        self.dirty = false;
        Ok(())
    }

    fn persist(&mut self) {
        match self.flush() {
            Ok(()) => debug!("Saved revision {} to slot '{}'", self.revision, self.slot),
            Err(err) => {
                self.dirty = true;
                error!(
                    "Failed to save snapshot to slot '{}' (revision {}): {}",
                    self.slot, self.revision, err
                );
            }
        }
    }
}
