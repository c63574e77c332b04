// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rideboard_audit::{AuditEvent, StateSummary};
use rideboard_domain::{
    Clarification, RouteConfig, RouteId, RouteTable, Student, StudentId, find_route_by_name,
    sorted_routes,
};
use serde::{Deserialize, Serialize};

/// The complete durable state: routes, students and clarifications.
///
/// A `State` is never patched in place by the engine. Every transition
/// builds a complete replacement value, and the snapshot store swaps it in
/// as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct State {
    /// All registered students, in registration order.
    pub students: Vec<Student>,
    /// All configured routes keyed by route id.
    pub routes: RouteTable,
    /// Clarification entries, newest first.
    #[serde(default)]
    pub clarifications: Vec<Clarification>,
}

impl State {
    /// Creates a state with the given routes and no students.
    #[must_use]
    pub fn with_routes(routes: RouteTable) -> Self {
        Self {
            students: Vec::new(),
            routes,
            clarifications: Vec::new(),
        }
    }

    /// Looks up a route by id.
    #[must_use]
    pub fn route(&self, route_id: &RouteId) -> Option<&RouteConfig> {
        self.routes.get(route_id)
    }

    /// Looks up a route by display name.
    #[must_use]
    pub fn route_by_name(&self, name: &str) -> Option<&RouteConfig> {
        find_route_by_name(&self.routes, name)
    }

    /// Looks up a student by id.
    #[must_use]
    pub fn student(&self, student_id: &StudentId) -> Option<&Student> {
        self.students
            .iter()
            .find(|student| &student.id == student_id)
    }

    /// Returns the routes in display order.
    #[must_use]
    pub fn sorted_routes(&self) -> Vec<&RouteConfig> {
        sorted_routes(&self.routes)
    }

    /// Summarizes the state for audit purposes.
    #[must_use]
    pub fn summary(&self) -> StateSummary {
        StateSummary::new(
            self.routes.len(),
            self.students.len(),
            self.clarifications.len(),
        )
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}
