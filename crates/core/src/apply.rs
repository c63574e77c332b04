// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State transitions.
//!
//! `apply` is the single entry point for mutating a [`State`]. It is pure:
//! the input state is never modified, and a rejected command leaves no trace.
//!
//! ## Ticket watermark
//!
//! Every route carries `last_ticket_issued`. Whenever a ticket is issued on a
//! route, or a ticket leaves it (deletion, move to another route), the
//! watermark is raised to at least that ticket so the number is never handed
//! out again.

use crate::command::{Command, RegistrationMode};
use crate::error::CoreError;
use crate::state::{State, TransitionResult};
use rideboard_audit::{Action, Actor, AuditEvent, Cause, StateSummary};
use rideboard_domain::{
    Clarification, ClarificationDetails, ClarificationId, DomainError, RouteConfig,
    RouteConfigPatch, RouteDefinition, RouteId, RouteTable, Student, StudentDetails, StudentId,
    StudentStatus, TicketNumber, Timestamp, count_students_on_route, evaluate_manual_admission,
    evaluate_self_service_admission, move_route, next_route_order, next_ticket_number,
    remove_route, unique_route_id, validate_clarification_details, validate_code_available,
    validate_route_name, validate_student_details,
};

/// Applies a command to the current state, producing a new state and audit event.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if the command violates a domain rule. The first
/// failing rule is reported.
pub fn apply(
    state: &State,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    let action_name: &'static str = command.action_name();

    let (new_state, details): (State, String) = match command {
        Command::RegisterStudent {
            student_id,
            details,
            registered_at,
            mode,
        } => register_student(state, student_id, details, registered_at, mode)?,
        Command::UpdateStudent {
            student_id,
            details,
            status,
        } => update_student(state, &student_id, details, status)?,
        Command::SetStudentStatus { student_id, status } => {
            set_student_status(state, &student_id, status)?
        }
        Command::DeleteStudent { student_id } => delete_student(state, &student_id)?,
        Command::DeleteStudentsOnRoute { route_id } => delete_students_on_route(state, &route_id)?,
        Command::AddRoute { definition } => add_route(state, definition)?,
        Command::UpdateRoute { route_id, patch } => update_route(state, &route_id, &patch)?,
        Command::DeleteRoute { route_id } => delete_route(state, &route_id)?,
        Command::ReorderRoute {
            route_id,
            new_order,
        } => reorder_route(state, &route_id, new_order)?,
        Command::AddClarification {
            clarification_id,
            details,
            created_at,
        } => add_clarification(state, clarification_id, details, created_at)?,
        Command::DeleteClarification { clarification_id } => {
            delete_clarification(state, &clarification_id)?
        }
    };

    let before: StateSummary = state.summary();
    let after: StateSummary = new_state.summary();
    let action: Action = Action::new(String::from(action_name), Some(details));
    let audit_event: AuditEvent = AuditEvent::new(actor, cause, action, before, after);

    Ok(TransitionResult {
        new_state,
        audit_event,
    })
}

fn require_route<'a>(
    state: &'a State,
    route_id: &RouteId,
) -> Result<&'a RouteConfig, DomainError> {
    state
        .route(route_id)
        .ok_or_else(|| DomainError::RouteNotFound(route_id.value().to_string()))
}

fn require_student<'a>(
    state: &'a State,
    student_id: &StudentId,
) -> Result<&'a Student, DomainError> {
    state
        .student(student_id)
        .ok_or_else(|| DomainError::StudentNotFound(student_id.value().to_string()))
}

/// Raises a route's watermark to at least `ticket`.
fn retire_ticket(routes: &mut RouteTable, route_id: &RouteId, ticket: TicketNumber) {
    if let Some(route) = routes.get_mut(route_id) {
        route.last_ticket_issued = route.last_ticket_issued.max(ticket);
    }
}

fn register_student(
    state: &State,
    student_id: StudentId,
    details: StudentDetails,
    registered_at: Timestamp,
    mode: RegistrationMode,
) -> Result<(State, String), CoreError> {
    let route: &RouteConfig = require_route(state, &details.route)?;
    validate_student_details(&details)?;

    match mode {
        RegistrationMode::SelfService => evaluate_self_service_admission(
            route,
            &details.code,
            &state.students,
            &state.clarifications,
        )?,
        RegistrationMode::Manual => evaluate_manual_admission(&details.code, &state.students)?,
    }

    if state.student(&student_id).is_some() {
        return Err(CoreError::DomainViolation(DomainError::IntegrityViolation(
            format!("student id '{student_id}' is already in use"),
        )));
    }

    let ticket: TicketNumber = next_ticket_number(&state.students, route)?;
    let route_name: String = route.name.clone();
    let student: Student = Student::admit(student_id, details, ticket, registered_at);
    let summary: String = format!(
        "Registered {} ({}) on {route_name} with ticket {ticket}",
        student.full_name(),
        student.code
    );

    let mut new_state: State = state.clone();
    retire_ticket(&mut new_state.routes, &student.route, ticket);
    new_state.students.push(student);

    Ok((new_state, summary))
}

fn update_student(
    state: &State,
    student_id: &StudentId,
    details: StudentDetails,
    status: StudentStatus,
) -> Result<(State, String), CoreError> {
    let existing: &Student = require_student(state, student_id)?;
    validate_student_details(&details)?;
    let target: &RouteConfig = require_route(state, &details.route)?;
    validate_code_available(&details.code, &state.students, Some(student_id))?;

    let mut new_state: State = state.clone();
    let mut ticket: TicketNumber = existing.ticket_number;
    if existing.route != details.route {
        retire_ticket(&mut new_state.routes, &existing.route, existing.ticket_number);
        ticket = next_ticket_number(&state.students, target)?;
        retire_ticket(&mut new_state.routes, &target.id, ticket);
    }

    let updated: Student = Student {
        id: existing.id.clone(),
        name: details.name,
        last_name: details.last_name,
        code: details.code,
        faculty: details.faculty,
        route: details.route,
        phone: details.phone,
        ticket_number: ticket,
        status,
        timestamp: existing.timestamp,
    };
    let summary: String = format!(
        "Updated student {} ({}) on {} with ticket {ticket}",
        updated.full_name(),
        updated.code,
        target.name
    );

    if let Some(slot) = new_state
        .students
        .iter_mut()
        .find(|student| &student.id == student_id)
    {
        *slot = updated;
    }

    Ok((new_state, summary))
}

fn set_student_status(
    state: &State,
    student_id: &StudentId,
    status: StudentStatus,
) -> Result<(State, String), CoreError> {
    let existing: &Student = require_student(state, student_id)?;
    let summary: String = format!(
        "Set status of {} from {} to {status}",
        existing.code, existing.status
    );

    let mut new_state: State = state.clone();
    if let Some(student) = new_state
        .students
        .iter_mut()
        .find(|student| &student.id == student_id)
    {
        student.status = status;
    }

    Ok((new_state, summary))
}

fn delete_student(state: &State, student_id: &StudentId) -> Result<(State, String), CoreError> {
    let existing: &Student = require_student(state, student_id)?;
    let summary: String = format!(
        "Deleted student {} ({}) holding ticket {}",
        existing.full_name(),
        existing.code,
        existing.ticket_number
    );

    let mut new_state: State = state.clone();
    retire_ticket(&mut new_state.routes, &existing.route, existing.ticket_number);
    new_state.students.retain(|student| &student.id != student_id);

    Ok((new_state, summary))
}

fn delete_students_on_route(
    state: &State,
    route_id: &RouteId,
) -> Result<(State, String), CoreError> {
    let route: &RouteConfig = require_route(state, route_id)?;

    let highest: Option<TicketNumber> = state
        .students
        .iter()
        .filter(|student| &student.route == route_id)
        .map(|student| student.ticket_number)
        .max();
    let removed: usize = count_students_on_route(&state.students, route_id);

    let mut new_state: State = state.clone();
    if let Some(ticket) = highest {
        retire_ticket(&mut new_state.routes, route_id, ticket);
    }
    new_state.students.retain(|student| &student.route != route_id);

    Ok((
        new_state,
        format!("Deleted {removed} students from {}", route.name),
    ))
}

fn add_route(state: &State, definition: RouteDefinition) -> Result<(State, String), CoreError> {
    validate_route_name(&definition.name, &state.routes, None)?;

    let route: RouteConfig = RouteConfig {
        id: unique_route_id(&state.routes, &definition.name),
        name: definition.name,
        subtitle: definition.subtitle,
        is_active: definition.is_active,
        capacity: definition.capacity,
        order: next_route_order(&state.routes),
        color: definition.color,
        last_ticket_issued: TicketNumber::NONE,
    };
    let summary: String = format!(
        "Added route {} (id {}, order {}, capacity {})",
        route.name, route.id, route.order, route.capacity
    );

    let mut new_state: State = state.clone();
    new_state.routes.insert(route.id.clone(), route);

    Ok((new_state, summary))
}

fn update_route(
    state: &State,
    route_id: &RouteId,
    patch: &RouteConfigPatch,
) -> Result<(State, String), CoreError> {
    let route: &RouteConfig = require_route(state, route_id)?;
    if let Some(name) = &patch.name {
        validate_route_name(name, &state.routes, Some(route_id))?;
    }

    let updated: RouteConfig = patch.merge_into(route);
    let summary: String = if updated.name == route.name {
        format!("Updated route {}", route.name)
    } else {
        format!("Updated route {} (renamed to {})", route.name, updated.name)
    };

    let mut new_state: State = state.clone();
    new_state.routes.insert(route_id.clone(), updated);

    Ok((new_state, summary))
}

fn delete_route(state: &State, route_id: &RouteId) -> Result<(State, String), CoreError> {
    let route: &RouteConfig = require_route(state, route_id)?;

    let student_count: usize = count_students_on_route(&state.students, route_id);
    if student_count > 0 {
        return Err(CoreError::DomainViolation(DomainError::RouteHasStudents {
            route: route.name.clone(),
            student_count,
        }));
    }

    let mut new_state: State = state.clone();
    new_state.routes = remove_route(&state.routes, route_id)?;

    Ok((new_state, format!("Deleted route {}", route.name)))
}

fn reorder_route(
    state: &State,
    route_id: &RouteId,
    new_order: usize,
) -> Result<(State, String), CoreError> {
    let route: &RouteConfig = require_route(state, route_id)?;
    let summary: String = format!(
        "Moved route {} from position {} to {new_order}",
        route.name, route.order
    );

    let mut new_state: State = state.clone();
    new_state.routes = move_route(&state.routes, route_id, new_order)?;

    Ok((new_state, summary))
}

fn add_clarification(
    state: &State,
    clarification_id: ClarificationId,
    details: ClarificationDetails,
    created_at: Timestamp,
) -> Result<(State, String), CoreError> {
    validate_clarification_details(&details)?;

    if state
        .clarifications
        .iter()
        .any(|entry| entry.id == clarification_id)
    {
        return Err(CoreError::DomainViolation(DomainError::IntegrityViolation(
            format!("clarification id '{clarification_id}' is already in use"),
        )));
    }

    let entry: Clarification = Clarification::new(clarification_id, details, created_at);
    let summary: String = format!("Blocked code {} pending clarification", entry.code);

    let mut new_state: State = state.clone();
    new_state.clarifications.insert(0, entry);

    Ok((new_state, summary))
}

fn delete_clarification(
    state: &State,
    clarification_id: &ClarificationId,
) -> Result<(State, String), CoreError> {
    let entry: &Clarification = state
        .clarifications
        .iter()
        .find(|entry| &entry.id == clarification_id)
        .ok_or_else(|| DomainError::ClarificationNotFound(clarification_id.value().to_string()))?;
    let summary: String = format!("Unblocked code {}", entry.code);

    let mut new_state: State = state.clone();
    new_state
        .clarifications
        .retain(|entry| &entry.id != clarification_id);

    Ok((new_state, summary))
}
