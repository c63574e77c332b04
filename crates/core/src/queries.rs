// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only views over a [`State`].
//!
//! Nothing here produces audit events or modifies state.

use crate::state::State;
use rideboard_domain::{
    DomainError, RouteConfig, RouteId, Student, StudentCode, StudentStatus, TicketNumber,
    count_students_on_route, is_code_blocked, is_code_registered, next_ticket_number,
};

/// Color used for a route name that matches no configured route.
pub const FALLBACK_ROUTE_COLOR: &str = "#3B82F6";

/// Seat usage for one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteOccupancy {
    /// The route.
    pub route_id: RouteId,
    /// The route's display name.
    pub name: String,
    /// Maximum self-service registrations.
    pub capacity: usize,
    /// Students registered on the route, in any status.
    pub registered: usize,
    /// Seats left for self-service registration.
    pub remaining: usize,
    /// Students in `Pending` status.
    pub pending: usize,
    /// Students in `Boarded` status.
    pub boarded: usize,
    /// Students in `NoShow` status.
    pub no_show: usize,
}

impl RouteOccupancy {
    /// Returns true if self-service registration would be rejected for capacity.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.registered >= self.capacity
    }
}

/// Returns true if `student` matches a free-text search term.
///
/// The term is matched case-insensitively as a substring of the name,
/// last name, code or phone. A blank term matches everyone.
#[must_use]
pub fn student_matches(student: &Student, term: &str) -> bool {
    let needle: String = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [
        student.name.as_str(),
        student.last_name.as_str(),
        student.code.value(),
        student.phone.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Lists students, optionally filtered by route and search term, ordered by ticket.
///
/// Students on different routes with the same ticket keep registration order.
#[must_use]
pub fn search_students<'a>(
    state: &'a State,
    route_id: Option<&RouteId>,
    term: Option<&str>,
) -> Vec<&'a Student> {
    let mut matches: Vec<&Student> = state
        .students
        .iter()
        .filter(|student| route_id.is_none_or(|route| &student.route == route))
        .filter(|student| term.is_none_or(|term| student_matches(student, term)))
        .collect();
    matches.sort_by_key(|student| student.ticket_number);
    matches
}

/// Lists the students on one route, optionally filtered, ordered by ticket.
#[must_use]
pub fn students_on_route<'a>(
    state: &'a State,
    route_id: &RouteId,
    term: Option<&str>,
) -> Vec<&'a Student> {
    search_students(state, Some(route_id), term)
}

/// Computes seat usage for a route.
///
/// Returns `None` if the route does not exist.
#[must_use]
pub fn route_occupancy(state: &State, route_id: &RouteId) -> Option<RouteOccupancy> {
    let route: &RouteConfig = state.route(route_id)?;
    let on_route: Vec<&Student> = students_on_route(state, route_id, None);
    let count_status = |status: StudentStatus| -> usize {
        on_route
            .iter()
            .filter(|student| student.status == status)
            .count()
    };

    Some(RouteOccupancy {
        route_id: route.id.clone(),
        name: route.name.clone(),
        capacity: route.capacity,
        registered: on_route.len(),
        remaining: route.capacity.saturating_sub(on_route.len()),
        pending: count_status(StudentStatus::Pending),
        boarded: count_status(StudentStatus::Boarded),
        no_show: count_status(StudentStatus::NoShow),
    })
}

/// Computes seat usage for every route, in display order.
#[must_use]
pub fn occupancy_by_route(state: &State) -> Vec<RouteOccupancy> {
    state
        .sorted_routes()
        .into_iter()
        .filter_map(|route| route_occupancy(state, &route.id))
        .collect()
}

/// Returns the ticket the next registration on a route would receive.
///
/// Returns `None` if the route does not exist.
///
/// # Errors
///
/// Returns `TicketsExhausted` if the route cannot issue another ticket.
pub fn peek_next_ticket(
    state: &State,
    route_id: &RouteId,
) -> Result<Option<TicketNumber>, DomainError> {
    state
        .route(route_id)
        .map(|route| next_ticket_number(&state.students, route))
        .transpose()
}

/// Returns true if a route exists and no student references it.
#[must_use]
pub fn can_delete_route(state: &State, route_id: &RouteId) -> bool {
    state.route(route_id).is_some() && count_students_on_route(&state.students, route_id) == 0
}

/// Returns the display color for a route name, or [`FALLBACK_ROUTE_COLOR`].
#[must_use]
pub fn route_color<'a>(state: &'a State, route_name: &str) -> &'a str {
    state
        .route_by_name(route_name)
        .map_or(FALLBACK_ROUTE_COLOR, |route| route.color.as_str())
}

/// Returns true if any student holds `code`.
#[must_use]
pub fn code_registered(state: &State, code: &StudentCode) -> bool {
    is_code_registered(code, &state.students)
}

/// Returns true if a clarification holds `code`.
#[must_use]
pub fn code_blocked(state: &State, code: &StudentCode) -> bool {
    is_code_blocked(code, &state.clarifications)
}
