// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod queries;
mod state;

#[cfg(test)]
mod tests;

use rideboard_domain::{ClarificationId, DomainError, RouteId, validate_snapshot_integrity};
use std::collections::HashSet;

// Re-export public types and functions
pub use apply::apply;
pub use command::{Command, RegistrationMode};
pub use error::CoreError;
pub use queries::{
    FALLBACK_ROUTE_COLOR, RouteOccupancy, can_delete_route, code_blocked, code_registered,
    occupancy_by_route, peek_next_ticket, route_color, route_occupancy, search_students,
    student_matches, students_on_route,
};
pub use state::{State, TransitionResult};

/// Resolves a route display name to its id.
///
/// This is a read-only validation that does not create audit events.
///
/// # Errors
///
/// Returns `DomainError::RouteNotFound` if no route has the given name.
pub fn resolve_route_name(state: &State, name: &str) -> Result<RouteId, DomainError> {
    state
        .route_by_name(name)
        .map(|route| route.id.clone())
        .ok_or_else(|| DomainError::RouteNotFound(name.to_string()))
}

/// Validates every structural invariant of a complete state.
///
/// # Errors
///
/// Returns `DomainError::IntegrityViolation` describing the first broken rule.
pub fn validate_state(state: &State) -> Result<(), DomainError> {
    validate_snapshot_integrity(&state.routes, &state.students)?;

    let mut seen: HashSet<&ClarificationId> = HashSet::new();
    if let Some(duplicate) = state
        .clarifications
        .iter()
        .find(|entry| !seen.insert(&entry.id))
    {
        return Err(DomainError::IntegrityViolation(format!(
            "duplicate clarification id '{}'",
            duplicate.id
        )));
    }
    Ok(())
}
