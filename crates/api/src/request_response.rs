// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry plain strings the way a form submits them. Routes are
//! addressed by display name; the handlers resolve names to route ids.

use rideboard::RouteOccupancy;
use rideboard_domain::{Clarification, RouteConfig, Student};

/// API request to register a student on a route.
///
/// Used by both self-service and manual registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterStudentRequest {
    /// Given name.
    pub name: String,
    /// Family name.
    pub last_name: String,
    /// University code.
    pub code: String,
    /// Faculty abbreviation (FAUA, FC, ...).
    pub faculty: String,
    /// Display name of the target route.
    pub route: String,
    /// Contact phone.
    pub phone: String,
}

/// API response for a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterStudentResponse {
    /// The new student's identifier.
    pub student_id: String,
    /// Display name of the route.
    pub route: String,
    /// The ticket issued on the route.
    pub ticket_number: u32,
    /// A success message.
    pub message: String,
}

/// API request to replace a student's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStudentRequest {
    /// The student to edit.
    pub student_id: String,
    /// Given name.
    pub name: String,
    /// Family name.
    pub last_name: String,
    /// University code.
    pub code: String,
    /// Faculty abbreviation.
    pub faculty: String,
    /// Display name of the route.
    pub route: String,
    /// Contact phone.
    pub phone: String,
    /// New status. `None` keeps the current one.
    pub status: Option<String>,
}

/// API response for a successful student edit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateStudentResponse {
    /// The edited student.
    pub student: StudentInfo,
    /// A success message.
    pub message: String,
}

/// API request to set a student's boarding status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetStudentStatusRequest {
    /// The student to update.
    pub student_id: String,
    /// The new status (`pending`, `boarded`, `no-show`).
    pub status: String,
}

/// API response for a status change.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetStudentStatusResponse {
    /// The updated student.
    pub student_id: String,
    /// The status now recorded.
    pub status: String,
    /// A success message.
    pub message: String,
}

/// API response for a single student deletion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteStudentResponse {
    /// The removed student.
    pub student_id: String,
    /// A success message.
    pub message: String,
}

/// API response for clearing a route.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteStudentsOnRouteResponse {
    /// Display name of the cleared route.
    pub route: String,
    /// How many students were removed.
    pub removed: usize,
    /// A success message.
    pub message: String,
}

/// API request to add a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRouteRequest {
    /// Display name.
    pub name: String,
    /// Secondary display line.
    pub subtitle: String,
    /// Whether self-service registration is open.
    pub is_active: bool,
    /// Seat count.
    pub capacity: usize,
    /// Display color.
    pub color: String,
}

/// API request to change a route's configuration.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateRouteRequest {
    /// New display name.
    pub name: Option<String>,
    /// New subtitle.
    pub subtitle: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
    /// New capacity.
    pub capacity: Option<usize>,
    /// New color.
    pub color: Option<String>,
}

/// API response for route creation, update and reordering.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RouteResponse {
    /// The route after the change.
    pub route: RouteInfo,
    /// A success message.
    pub message: String,
}

/// API response for route deletion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteRouteResponse {
    /// Display name of the deleted route.
    pub route: String,
    /// A success message.
    pub message: String,
}

/// API request to add a clarification entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddClarificationRequest {
    /// Given name.
    pub name: String,
    /// Family name.
    pub last_name: String,
    /// The code to block.
    pub code: String,
    /// Contact phone.
    pub phone: String,
    /// Why the code is held back.
    pub reason: String,
}

/// API response for clarification creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddClarificationResponse {
    /// The new entry.
    pub clarification: ClarificationInfo,
    /// A success message.
    pub message: String,
}

/// API response for clarification removal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteClarificationResponse {
    /// The removed entry.
    pub clarification_id: String,
    /// A success message.
    pub message: String,
}

/// A route together with its seat usage.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RouteInfo {
    /// The route's immutable identifier.
    pub route_id: String,
    /// Display name.
    pub name: String,
    /// Secondary display line.
    pub subtitle: String,
    /// Whether self-service registration is open.
    pub is_active: bool,
    /// Position in the route order.
    pub order: usize,
    /// Display color.
    pub color: String,
    /// Seat count.
    pub capacity: usize,
    /// Students registered, in any status.
    pub registered: usize,
    /// Seats left for self-service.
    pub remaining: usize,
    /// Students who boarded.
    pub boarded: usize,
    /// Students who did not show up.
    pub no_show: usize,
}

impl RouteInfo {
    /// Builds route info from a route and its occupancy.
    #[must_use]
    pub fn from_route(route: &RouteConfig, occupancy: &RouteOccupancy) -> Self {
        Self {
            route_id: route.id.value().to_string(),
            name: route.name.clone(),
            subtitle: route.subtitle.clone(),
            is_active: route.is_active,
            order: route.order,
            color: route.color.clone(),
            capacity: route.capacity,
            registered: occupancy.registered,
            remaining: occupancy.remaining,
            boarded: occupancy.boarded,
            no_show: occupancy.no_show,
        }
    }
}

/// A registered student as shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StudentInfo {
    /// The student's identifier.
    pub student_id: String,
    /// Given name.
    pub name: String,
    /// Family name.
    pub last_name: String,
    /// University code.
    pub code: String,
    /// Faculty abbreviation.
    pub faculty: String,
    /// Display name of the route.
    pub route: String,
    /// Contact phone.
    pub phone: String,
    /// Ticket on the route.
    pub ticket_number: u32,
    /// Boarding status.
    pub status: String,
    /// Registration time in Unix milliseconds.
    pub registered_at: i64,
}

impl StudentInfo {
    /// Builds student info, labelling the route with `route_name`.
    #[must_use]
    pub fn from_student(student: &Student, route_name: &str) -> Self {
        Self {
            student_id: student.id.value().to_string(),
            name: student.name.clone(),
            last_name: student.last_name.clone(),
            code: student.code.value().to_string(),
            faculty: student.faculty.to_string(),
            route: route_name.to_string(),
            phone: student.phone.clone(),
            ticket_number: student.ticket_number.value(),
            status: student.status.to_string(),
            registered_at: student.timestamp.as_unix_millis(),
        }
    }
}

/// A clarification entry as shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClarificationInfo {
    /// The entry's identifier.
    pub clarification_id: String,
    /// Given name.
    pub name: String,
    /// Family name.
    pub last_name: String,
    /// The blocked code.
    pub code: String,
    /// Contact phone.
    pub phone: String,
    /// Why the code is held back.
    pub reason: String,
    /// Creation time in Unix milliseconds.
    pub created_at: i64,
}

impl From<&Clarification> for ClarificationInfo {
    fn from(clarification: &Clarification) -> Self {
        Self {
            clarification_id: clarification.id.value().to_string(),
            name: clarification.name.clone(),
            last_name: clarification.last_name.clone(),
            code: clarification.code.value().to_string(),
            phone: clarification.phone.clone(),
            reason: clarification.reason.clone(),
            created_at: clarification.timestamp.as_unix_millis(),
        }
    }
}
