// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The serialized snapshot document.
//!
//! ```json
//! { "students": [...], "routes": { "<route id>": {...} }, "clarifications": [...] }
//! ```
//!
//! Field names are camelCase. Unknown top-level fields are ignored and a
//! missing `clarifications` field loads as an empty list, so payloads written
//! by older clients still load.

use rideboard::{State, validate_state};
use rideboard_domain::{Clarification, RouteTable, Student};
use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;

/// Serializable representation of the full State.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotData {
    pub students: Vec<Student>,
    pub routes: RouteTable,
    #[serde(default)]
    pub clarifications: Vec<Clarification>,
}

impl From<&State> for SnapshotData {
    fn from(state: &State) -> Self {
        Self {
            students: state.students.clone(),
            routes: state.routes.clone(),
            clarifications: state.clarifications.clone(),
        }
    }
}

impl From<SnapshotData> for State {
    fn from(data: SnapshotData) -> Self {
        Self {
            students: data.students,
            routes: data.routes,
            clarifications: data.clarifications,
        }
    }
}

/// Serializes a state into the snapshot payload.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_snapshot(state: &State) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string_pretty(&SnapshotData::from(state))?)
}

/// Parses and validates a snapshot payload.
///
/// # Errors
///
/// Returns an error if:
/// - The payload is not a valid snapshot document (`SerializationError`)
/// - The document breaks a state invariant (`CorruptSnapshot`)
pub fn decode_snapshot(payload: &str) -> Result<State, PersistenceError> {
    let data: SnapshotData = serde_json::from_str(payload)?;
    let state: State = State::from(data);
    validate_state(&state).map_err(|err| PersistenceError::CorruptSnapshot(err.to_string()))?;
    Ok(state)
}
