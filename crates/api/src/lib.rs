// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The API boundary for Rideboard.
//!
//! Handlers here authorize the caller, translate string-typed requests into
//! core commands, and translate domain and core errors into [`ApiError`].

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
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod export;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Role};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use export::{
    Boarded, ExportError, ROSTER_HEADERS, ROSTER_TITLE_LABELS, ROSTER_TOTAL_LABEL, RosterRow,
    RouteRoster, route_roster,
};
pub use handlers::{
    ApiResult, add_clarification, add_route, can_delete_route, delete_clarification,
    delete_route, delete_student, delete_students_on_route, export_roster, is_code_blocked,
    is_code_registered, list_clarifications, list_routes, list_students, next_ticket_number,
    now_timestamp, register_manually, register_self_service, reorder_routes, route_color,
    set_student_status, update_route_config, update_student,
};
pub use request_response::{
    AddClarificationRequest, AddClarificationResponse, AddRouteRequest, ClarificationInfo,
    DeleteClarificationResponse, DeleteRouteResponse, DeleteStudentResponse,
    DeleteStudentsOnRouteResponse, RegisterStudentRequest, RegisterStudentResponse, RouteInfo,
    RouteResponse, SetStudentStatusRequest, SetStudentStatusResponse, StudentInfo,
    UpdateRouteRequest, UpdateStudentRequest, UpdateStudentResponse,
};
