// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admission rules and ticket numbering.
//!
//! ## Self-Service Admission (Authoritative Order)
//!
//! A self-service registration is evaluated against one consistent read of
//! state, and the first failing rule is reported:
//!
//! 1. The code is held by a clarification (`CodeBlocked`)
//! 2. The code belongs to a registered student on any route (`CodeTaken`)
//! 3. The route is inactive (`RouteInactive`)
//! 4. The route's student count has reached its capacity (`RouteFull`)
//!
//! ## Manual Admission
//!
//! Administrators skip rules 1, 3 and 4. Code uniqueness (rule 2) is never
//! overridable.
//!
//! ## Ticket Numbers
//!
//! The next ticket on a route is one past the highest ticket the route has
//! ever issued: `1 + max(existing tickets, route.last_ticket_issued)`, or `1`
//! on a fresh route. Deleting students leaves gaps and never causes a ticket
//! to be issued twice. A route whose highest ticket is `u32::MAX` refuses
//! further registrations with `TicketsExhausted`.

use crate::error::DomainError;
use crate::types::{Clarification, RouteConfig, RouteId, Student, StudentCode, TicketNumber};
use crate::validation::{validate_code_available, validate_code_not_blocked};

/// Counts the students registered on a route, regardless of status.
#[must_use]
pub fn count_students_on_route(students: &[Student], route_id: &RouteId) -> usize {
    students
        .iter()
        .filter(|student| &student.route == route_id)
        .count()
}

/// Returns the ticket number the next registration on `route` receives.
///
/// # Errors
///
/// Returns `TicketsExhausted` if the route's highest ticket cannot be
/// incremented.
pub fn next_ticket_number(
    students: &[Student],
    route: &RouteConfig,
) -> Result<TicketNumber, DomainError> {
    let highest: TicketNumber = students
        .iter()
        .filter(|student| student.route == route.id)
        .map(|student| student.ticket_number)
        .fold(route.last_ticket_issued, TicketNumber::max);
    highest.next().ok_or_else(|| DomainError::TicketsExhausted {
        route: route.name.clone(),
    })
}

/// Evaluates whether a self-service registration may be admitted.
///
/// # Arguments
///
/// * `route` - The target route
/// * `code` - The registering student's code
/// * `students` - All registered students
/// * `clarifications` - All clarification entries
///
/// # Errors
///
/// Returns the first failing rule, in the order listed in the module docs.
pub fn evaluate_self_service_admission(
    route: &RouteConfig,
    code: &StudentCode,
    students: &[Student],
    clarifications: &[Clarification],
) -> Result<(), DomainError> {
    validate_code_not_blocked(code, clarifications)?;
    validate_code_available(code, students, None)?;

    if !route.is_active {
        return Err(DomainError::RouteInactive {
            route: route.name.clone(),
        });
    }

    let registered: usize = count_students_on_route(students, &route.id);
    if registered >= route.capacity {
        return Err(DomainError::RouteFull {
            route: route.name.clone(),
            capacity: route.capacity,
        });
    }

    Ok(())
}

/// Evaluates whether an administrator-entered registration may be admitted.
///
/// # Errors
///
/// Returns `DomainError::CodeTaken` if the code is already registered.
pub fn evaluate_manual_admission(
    code: &StudentCode,
    students: &[Student],
) -> Result<(), DomainError> {
    validate_code_available(code, students, None)
}
