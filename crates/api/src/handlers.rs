// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every state-changing handler authorizes the actor, translates the request
//! into a [`Command`], and runs it as one [`SnapshotStore::transact`] so the
//! checks and the commit see the same state. Ids and timestamps are generated
//! here, never in the core.

use rideboard::{
    Command, RegistrationMode, RouteOccupancy, State, TransitionResult, apply,
    can_delete_route as route_is_empty, code_blocked, code_registered, occupancy_by_route,
    peek_next_ticket, resolve_route_name, route_color as configured_route_color,
    route_occupancy, search_students,
};
use rideboard_audit::{Actor, AuditEvent, Cause};
use rideboard_domain::{
    ClarificationDetails, ClarificationId, Faculty, RouteConfig, RouteConfigPatch,
    RouteDefinition, RouteId, Student, StudentCode, StudentDetails, StudentId, StudentStatus,
    TicketNumber, Timestamp,
};
use rideboard_persistence::SnapshotStore;
use time::{Date, OffsetDateTime};
use tracing::{debug, warn};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::export::{RouteRoster, route_roster};
use crate::request_response::{
    AddClarificationRequest, AddClarificationResponse, AddRouteRequest, ClarificationInfo,
    DeleteClarificationResponse, DeleteRouteResponse, DeleteStudentResponse,
    DeleteStudentsOnRouteResponse, RegisterStudentRequest, RegisterStudentResponse, RouteInfo,
    RouteResponse, SetStudentStatusRequest, SetStudentStatusResponse, StudentInfo,
    UpdateRouteRequest, UpdateStudentRequest, UpdateStudentResponse,
};

/// The result of an API operation that includes both the response and the audit event.
///
/// This ensures that successful API operations always produce an audit trail.
#[derive(Debug, Clone)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The audit event generated by this operation.
    pub audit_event: AuditEvent,
}

/// Returns the current time as a [`Timestamp`].
///
/// # Errors
///
/// Returns an error if the clock is outside the representable range.
pub fn now_timestamp() -> Result<Timestamp, ApiError> {
    let millis: i128 = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let millis: i64 = i64::try_from(millis).map_err(|e| ApiError::Internal {
        message: format!("System clock out of range: {e}"),
    })?;
    Ok(Timestamp::from_unix_millis(millis))
}

fn parse_faculty(value: &str) -> Result<Faculty, ApiError> {
    value.parse::<Faculty>().map_err(translate_domain_error)
}

fn parse_status(value: &str) -> Result<StudentStatus, ApiError> {
    value.parse::<StudentStatus>().map_err(translate_domain_error)
}

fn resolve_route(store: &SnapshotStore, route_name: &str) -> Result<RouteId, ApiError> {
    resolve_route_name(store.read(), route_name).map_err(translate_domain_error)
}

fn route_name_for(store: &SnapshotStore, route_id: &RouteId) -> String {
    store
        .read()
        .route(route_id)
        .map_or_else(|| route_id.value().to_string(), |route| route.name.clone())
}

fn route_info(store: &SnapshotStore, route_id: &RouteId) -> Result<RouteInfo, ApiError> {
    let state: &State = store.read();
    let missing = || ApiError::ResourceNotFound {
        resource_type: String::from("Route"),
        message: format!("Route '{}' not found", route_id.value()),
    };
    let route: &RouteConfig = state.route(route_id).ok_or_else(missing)?;
    let occupancy: RouteOccupancy = route_occupancy(state, route_id).ok_or_else(missing)?;
    Ok(RouteInfo::from_route(route, &occupancy))
}

fn student_info(store: &SnapshotStore, student_id: &StudentId) -> Result<StudentInfo, ApiError> {
    let student: &Student = store
        .read()
        .student(student_id)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Student"),
            message: format!("Student '{}' not found", student_id.value()),
        })?;
    Ok(StudentInfo::from_student(
        student,
        &route_name_for(store, &student.route),
    ))
}

/// Runs one command against the store and commits it on success.
fn execute(
    store: &mut SnapshotStore,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<AuditEvent, ApiError> {
    let audit_event: AuditEvent = store.transact(|state| -> Result<TransitionResult, ApiError> {
        apply(state, command, actor, cause).map_err(translate_core_error)
    })?;
    if store.is_dirty() {
        warn!(
            "{} committed in memory but not yet saved to slot '{}'",
            audit_event.action.name,
            store.slot()
        );
    }
    Ok(audit_event)
}

fn register(
    store: &mut SnapshotStore,
    request: RegisterStudentRequest,
    mode: RegistrationMode,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<RegisterStudentResponse>, ApiError> {
    let route_id: RouteId = resolve_route(store, &request.route)?;
    let details: StudentDetails = StudentDetails {
        name: request.name,
        last_name: request.last_name,
        code: StudentCode::new(&request.code),
        faculty: parse_faculty(&request.faculty)?,
        route: route_id.clone(),
        phone: request.phone,
    };
    let student_id: StudentId = StudentId::generate();
    let command: Command = Command::RegisterStudent {
        student_id: student_id.clone(),
        details,
        registered_at: now_timestamp()?,
        mode,
    };

    let audit_event: AuditEvent =
        execute(store, command, authenticated_actor.to_audit_actor(), cause).inspect_err(
            |err| debug!("Registration of code '{}' rejected: {}", request.code, err),
        )?;

    let ticket: TicketNumber = store
        .read()
        .student(&student_id)
        .map(|student| student.ticket_number)
        .unwrap_or_default();
    let route_name: String = route_name_for(store, &route_id);

    Ok(ApiResult {
        response: RegisterStudentResponse {
            student_id: student_id.value().to_string(),
            message: format!(
                "Registered {} on {} with ticket {}",
                request.code,
                route_name,
                ticket.value()
            ),
            route: route_name,
            ticket_number: ticket.value(),
        },
        audit_event,
    })
}

/// Registers a student through the public form.
///
/// Open to every role. The code must not be under clarification or already
/// registered, and the route must be active with a free seat.
///
/// # Arguments
///
/// * `store` - The snapshot store
/// * `request` - The registration form
/// * `authenticated_actor` - The actor submitting the form
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// Returns an error if the route or faculty is unknown, a field is blank,
/// or any admission rule rejects the registration.
pub fn register_self_service(
    store: &mut SnapshotStore,
    request: RegisterStudentRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<RegisterStudentResponse>, ApiError> {
    register(
        store,
        request,
        RegistrationMode::SelfService,
        authenticated_actor,
        cause,
    )
}

/// Registers a student on behalf of an administrator.
///
/// Skips the clarification, active-route and capacity checks. The code must
/// still be unused.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an admin
/// - The route or faculty is unknown
/// - A field is blank or the code is already registered
pub fn register_manually(
    store: &mut SnapshotStore,
    request: RegisterStudentRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<RegisterStudentResponse>, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "register_manually")?;
    register(
        store,
        request,
        RegistrationMode::Manual,
        authenticated_actor,
        cause,
    )
}

/// Replaces a student's editable fields.
///
/// Moving the student to another route issues a new ticket on that route.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the student or route does
/// not exist, a field is invalid, or the new code belongs to another student.
pub fn update_student(
    store: &mut SnapshotStore,
    request: UpdateStudentRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<UpdateStudentResponse>, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "update_student")?;

    let student_id: StudentId = StudentId::new(&request.student_id);
    let current_status: StudentStatus = store
        .read()
        .student(&student_id)
        .map(|student| student.status)
        .unwrap_or_default();
    let status: StudentStatus = match request.status.as_deref() {
        Some(value) => parse_status(value)?,
        None => current_status,
    };
    let details: StudentDetails = StudentDetails {
        name: request.name,
        last_name: request.last_name,
        code: StudentCode::new(&request.code),
        faculty: parse_faculty(&request.faculty)?,
        route: resolve_route(store, &request.route)?,
        phone: request.phone,
    };
    let command: Command = Command::UpdateStudent {
        student_id: student_id.clone(),
        details,
        status,
    };

    let audit_event: AuditEvent =
        execute(store, command, authenticated_actor.to_audit_actor(), cause)?;
    let student: StudentInfo = student_info(store, &student_id)?;

    Ok(ApiResult {
        response: UpdateStudentResponse {
            message: format!("Updated student {}", student.code),
            student,
        },
        audit_event,
    })
}

/// Sets a student's boarding status. Any status may follow any other.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the status is not
/// recognized, or the student does not exist.
pub fn set_student_status(
    store: &mut SnapshotStore,
    request: SetStudentStatusRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<SetStudentStatusResponse>, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "set_student_status")?;

    let status: StudentStatus = parse_status(&request.status)?;
    let command: Command = Command::SetStudentStatus {
        student_id: StudentId::new(&request.student_id),
        status,
    };
    let audit_event: AuditEvent =
        execute(store, command, authenticated_actor.to_audit_actor(), cause)?;

    Ok(ApiResult {
        response: SetStudentStatusResponse {
            message: format!("Student {} is now {status}", request.student_id),
            student_id: request.student_id,
            status: status.to_string(),
        },
        audit_event,
    })
}

/// Removes one student.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the student does not exist.
pub fn delete_student(
    store: &mut SnapshotStore,
    student_id: &str,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<DeleteStudentResponse>, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "delete_student")?;

    let command: Command = Command::DeleteStudent {
        student_id: StudentId::new(student_id),
    };
    let audit_event: AuditEvent =
        execute(store, command, authenticated_actor.to_audit_actor(), cause)?;

    Ok(ApiResult {
        response: DeleteStudentResponse {
            student_id: student_id.to_string(),
            message: format!("Deleted student {student_id}"),
        },
        audit_event,
    })
}

/// Removes every student on a route. Clearing an empty route succeeds.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the route does not exist.
pub fn delete_students_on_route(
    store: &mut SnapshotStore,
    route_name: &str,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<DeleteStudentsOnRouteResponse>, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "delete_students_on_route")?;

    let route_id: RouteId = resolve_route(store, route_name)?;
    let command: Command = Command::DeleteStudentsOnRoute { route_id };
    let audit_event: AuditEvent =
        execute(store, command, authenticated_actor.to_audit_actor(), cause)?;
    let removed: usize = audit_event
        .before
        .students
        .saturating_sub(audit_event.after.students);

    Ok(ApiResult {
        response: DeleteStudentsOnRouteResponse {
            route: route_name.to_string(),
            removed,
            message: format!("Removed {removed} students from {route_name}"),
        },
        audit_event,
    })
}

/// Adds a route at the end of the route order.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the name is blank or
/// already in use.
pub fn add_route(
    store: &mut SnapshotStore,
    request: AddRouteRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<RouteResponse>, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "add_route")?;

    let name: String = request.name.trim().to_string();
    let command: Command = Command::AddRoute {
        definition: RouteDefinition {
            name: name.clone(),
            subtitle: request.subtitle,
            is_active: request.is_active,
            capacity: request.capacity,
            color: request.color,
        },
    };
    let audit_event: AuditEvent =
        execute(store, command, authenticated_actor.to_audit_actor(), cause)?;
    let route_id: RouteId = resolve_route(store, &name)?;
    let route: RouteInfo = route_info(store, &route_id)?;

    Ok(ApiResult {
        response: RouteResponse {
            message: format!("Added route {} at position {}", route.name, route.order),
            route,
        },
        audit_event,
    })
}

/// Shallow-merges configuration changes into the route named `route_name`.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the route does not exist,
/// or a rename collides with another route or is blank.
pub fn update_route_config(
    store: &mut SnapshotStore,
    route_name: &str,
    request: UpdateRouteRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<RouteResponse>, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "update_route_config")?;

    let route_id: RouteId = resolve_route(store, route_name)?;
    let patch: RouteConfigPatch = RouteConfigPatch {
        name: request.name.map(|name| name.trim().to_string()),
        subtitle: request.subtitle,
        is_active: request.is_active,
        capacity: request.capacity,
        color: request.color,
    };
    let command: Command = Command::UpdateRoute {
        route_id: route_id.clone(),
        patch,
    };
    let audit_event: AuditEvent =
        execute(store, command, authenticated_actor.to_audit_actor(), cause)?;
    let route: RouteInfo = route_info(store, &route_id)?;

    Ok(ApiResult {
        response: RouteResponse {
            message: format!("Updated route {}", route.name),
            route,
        },
        audit_event,
    })
}

/// Deletes a route that no student references.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the route does not exist,
/// or students are still registered on it.
pub fn delete_route(
    store: &mut SnapshotStore,
    route_name: &str,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<DeleteRouteResponse>, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "delete_route")?;

    let route_id: RouteId = resolve_route(store, route_name)?;
    let command: Command = Command::DeleteRoute { route_id };
    let audit_event: AuditEvent =
        execute(store, command, authenticated_actor.to_audit_actor(), cause)?;

    Ok(ApiResult {
        response: DeleteRouteResponse {
            route: route_name.to_string(),
            message: format!("Deleted route {route_name}"),
        },
        audit_event,
    })
}

/// Moves a route to position `new_order`, shifting the routes in between.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the route does not exist,
/// or `new_order` is not below the route count.
pub fn reorder_routes(
    store: &mut SnapshotStore,
    route_name: &str,
    new_order: usize,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<RouteResponse>, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "reorder_routes")?;

    let route_id: RouteId = resolve_route(store, route_name)?;
    let command: Command = Command::ReorderRoute {
        route_id: route_id.clone(),
        new_order,
    };
    let audit_event: AuditEvent =
        execute(store, command, authenticated_actor.to_audit_actor(), cause)?;
    let route: RouteInfo = route_info(store, &route_id)?;

    Ok(ApiResult {
        response: RouteResponse {
            message: format!("Moved route {} to position {}", route.name, route.order),
            route,
        },
        audit_event,
    })
}

/// Blocks a code from self-service registration.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the code is blank.
pub fn add_clarification(
    store: &mut SnapshotStore,
    request: AddClarificationRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<AddClarificationResponse>, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "add_clarification")?;

    let clarification_id: ClarificationId = ClarificationId::generate();
    let command: Command = Command::AddClarification {
        clarification_id: clarification_id.clone(),
        details: ClarificationDetails {
            name: request.name,
            last_name: request.last_name,
            code: StudentCode::new(&request.code),
            phone: request.phone,
            reason: request.reason,
        },
        created_at: now_timestamp()?,
    };
    let audit_event: AuditEvent =
        execute(store, command, authenticated_actor.to_audit_actor(), cause)?;

    let clarification: ClarificationInfo = store
        .read()
        .clarifications
        .iter()
        .find(|entry| entry.id == clarification_id)
        .map(ClarificationInfo::from)
        .ok_or_else(|| ApiError::Internal {
            message: format!(
                "Clarification '{}' missing after commit",
                clarification_id.value()
            ),
        })?;

    Ok(ApiResult {
        response: AddClarificationResponse {
            message: format!("Code {} is now under clarification", clarification.code),
            clarification,
        },
        audit_event,
    })
}

/// Removes a clarification entry.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the entry does not exist.
pub fn delete_clarification(
    store: &mut SnapshotStore,
    clarification_id: &str,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<DeleteClarificationResponse>, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "delete_clarification")?;

    let command: Command = Command::DeleteClarification {
        clarification_id: ClarificationId::new(clarification_id),
    };
    let audit_event: AuditEvent =
        execute(store, command, authenticated_actor.to_audit_actor(), cause)?;

    Ok(ApiResult {
        response: DeleteClarificationResponse {
            clarification_id: clarification_id.to_string(),
            message: format!("Deleted clarification {clarification_id}"),
        },
        audit_event,
    })
}

/// Lists every route in display order with its seat usage.
#[must_use]
pub fn list_routes(store: &SnapshotStore) -> Vec<RouteInfo> {
    let state: &State = store.read();
    occupancy_by_route(state)
        .iter()
        .filter_map(|occupancy| {
            state
                .route(&occupancy.route_id)
                .map(|route| RouteInfo::from_route(route, occupancy))
        })
        .collect()
}

/// Lists students ordered by ticket, optionally restricted to one route and
/// filtered by a search term over name, last name, code and phone.
///
/// # Errors
///
/// Returns an error if `route_name` is given and matches no route.
pub fn list_students(
    store: &SnapshotStore,
    route_name: Option<&str>,
    search: Option<&str>,
) -> Result<Vec<StudentInfo>, ApiError> {
    let route_id: Option<RouteId> = route_name
        .map(|name| resolve_route(store, name))
        .transpose()?;
    let state: &State = store.read();

    Ok(search_students(state, route_id.as_ref(), search)
        .into_iter()
        .map(|student| StudentInfo::from_student(student, &route_name_for(store, &student.route)))
        .collect())
}

/// Returns the ticket the next registration on a route would receive.
///
/// # Errors
///
/// Returns an error if the route does not exist or has no tickets left.
pub fn next_ticket_number(store: &SnapshotStore, route_name: &str) -> Result<u32, ApiError> {
    let route_id: RouteId = resolve_route(store, route_name)?;
    peek_next_ticket(store.read(), &route_id)
        .map_err(translate_domain_error)?
        .map(|ticket| ticket.value())
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Route"),
            message: format!("Route '{route_name}' not found"),
        })
}

/// Returns true if a route exists and no student is registered on it.
#[must_use]
pub fn can_delete_route(store: &SnapshotStore, route_name: &str) -> bool {
    resolve_route(store, route_name).is_ok_and(|route_id| route_is_empty(store.read(), &route_id))
}

/// Returns true if a student already holds `code`.
#[must_use]
pub fn is_code_registered(store: &SnapshotStore, code: &str) -> bool {
    code_registered(store.read(), &StudentCode::new(code))
}

/// Returns true if `code` is under clarification.
#[must_use]
pub fn is_code_blocked(store: &SnapshotStore, code: &str) -> bool {
    code_blocked(store.read(), &StudentCode::new(code))
}

/// Returns the display color of a route, or the fallback color.
#[must_use]
pub fn route_color(store: &SnapshotStore, route_name: &str) -> String {
    configured_route_color(store.read(), route_name).to_string()
}

/// Lists clarification entries, newest first.
#[must_use]
pub fn list_clarifications(store: &SnapshotStore) -> Vec<ClarificationInfo> {
    store
        .read()
        .clarifications
        .iter()
        .map(ClarificationInfo::from)
        .collect()
}

/// Builds the printable roster of a route.
///
/// # Errors
///
/// Returns an error if the route does not exist.
pub fn export_roster(
    store: &SnapshotStore,
    route_name: &str,
    generated_on: Date,
) -> Result<RouteRoster, ApiError> {
    route_roster(store.read(), route_name, generated_on).map_err(translate_domain_error)
}
