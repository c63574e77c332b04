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

mod admission;
mod error;
mod route_table;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use admission::{
    count_students_on_route, evaluate_manual_admission, evaluate_self_service_admission,
    next_ticket_number,
};
pub use route_table::{
    RouteTable, find_route_by_name, has_dense_order, move_route, next_route_order, remove_route,
    route_slug, sorted_routes, unique_route_id,
};

// Re-export public types
pub use error::DomainError;
pub use types::{
    Clarification, ClarificationDetails, ClarificationId, Faculty, RouteConfig, RouteConfigPatch,
    RouteDefinition, RouteId, Student, StudentCode, StudentDetails, StudentId, StudentStatus,
    TicketNumber, Timestamp,
};
pub use validation::{
    is_code_blocked, is_code_registered, validate_clarification_details, validate_code_available,
    validate_code_not_blocked, validate_route_name, validate_snapshot_integrity,
    validate_student_details,
};
