// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::route_table::{RouteTable, has_dense_order};
use crate::types::{
    Clarification, ClarificationDetails, RouteId, Student, StudentCode, StudentDetails, StudentId,
};
use std::collections::HashSet;

/// Validates that the required fields of a registration are present.
///
/// This function checks that required fields are not blank.
/// It does NOT check for uniqueness (that requires context).
///
/// # Errors
///
/// Returns `DomainError::InvalidStudentField` if the name, last name, code
/// or phone is empty after trimming.
pub fn validate_student_details(details: &StudentDetails) -> Result<(), DomainError> {
    let required: [(&'static str, &str); 4] = [
        ("name", details.name.as_str()),
        ("last name", details.last_name.as_str()),
        ("code", details.code.value()),
        ("phone", details.phone.as_str()),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidStudentField {
                field,
                message: String::from("must not be empty"),
            });
        }
    }

    Ok(())
}

/// Validates that the required fields of a clarification are present.
///
/// # Errors
///
/// Returns `DomainError::InvalidClarificationField` if the code is blank.
pub fn validate_clarification_details(details: &ClarificationDetails) -> Result<(), DomainError> {
    if details.code.value().trim().is_empty() {
        return Err(DomainError::InvalidClarificationField {
            field: "code",
            message: String::from("must not be empty"),
        });
    }
    Ok(())
}

/// Returns true if any registered student holds `code`.
#[must_use]
pub fn is_code_registered(code: &StudentCode, students: &[Student]) -> bool {
    students.iter().any(|student| &student.code == code)
}

/// Returns true if any clarification entry holds `code`.
#[must_use]
pub fn is_code_blocked(code: &StudentCode, clarifications: &[Clarification]) -> bool {
    clarifications
        .iter()
        .any(|clarification| &clarification.code == code)
}

/// Validates that a code is not used by any other student.
///
/// Codes are unique across all routes.
///
/// # Arguments
///
/// * `code` - The code to validate
/// * `students` - All registered students
/// * `except` - A student to ignore (the record being edited), if any
///
/// # Errors
///
/// Returns `DomainError::CodeTaken` if another student holds the code.
pub fn validate_code_available(
    code: &StudentCode,
    students: &[Student],
    except: Option<&StudentId>,
) -> Result<(), DomainError> {
    let taken: bool = students
        .iter()
        .filter(|student| Some(&student.id) != except)
        .any(|student| &student.code == code);

    if taken {
        return Err(DomainError::CodeTaken {
            code: code.value().to_string(),
        });
    }
    Ok(())
}

/// Validates that a code is not held back by a clarification.
///
/// # Errors
///
/// Returns `DomainError::CodeBlocked` if any clarification holds the code.
pub fn validate_code_not_blocked(
    code: &StudentCode,
    clarifications: &[Clarification],
) -> Result<(), DomainError> {
    if is_code_blocked(code, clarifications) {
        return Err(DomainError::CodeBlocked {
            code: code.value().to_string(),
        });
    }
    Ok(())
}

/// Validates a route display name and its uniqueness.
///
/// # Arguments
///
/// * `name` - The proposed display name
/// * `routes` - The current route table
/// * `except` - A route to ignore (the route being renamed), if any
///
/// # Errors
///
/// Returns an error if:
/// - The name is blank (`InvalidRouteName`)
/// - Another route already uses the name (`DuplicateRouteName`)
pub fn validate_route_name(
    name: &str,
    routes: &RouteTable,
    except: Option<&RouteId>,
) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidRouteName(String::from(
            "Route name cannot be empty",
        )));
    }

    let duplicate: bool = routes
        .values()
        .filter(|route| Some(&route.id) != except)
        .any(|route| route.name == name);

    if duplicate {
        return Err(DomainError::DuplicateRouteName(name.to_string()));
    }
    Ok(())
}

/// Validates every invariant a complete snapshot must satisfy.
///
/// Used when loading persisted state: a snapshot that fails here is treated
/// as corrupt.
///
/// # Errors
///
/// Returns `DomainError::IntegrityViolation` describing the first broken rule:
/// - Route map keys match route ids
/// - Route names are unique
/// - Route orders are dense
/// - Every student references an existing route
/// - Student ids and codes are unique
/// - Ticket numbers are unique within each route
pub fn validate_snapshot_integrity(
    routes: &RouteTable,
    students: &[Student],
) -> Result<(), DomainError> {
    if let Some((key, route)) = routes.iter().find(|(key, route)| **key != route.id) {
        return Err(DomainError::IntegrityViolation(format!(
            "route stored under '{key}' has id '{}'",
            route.id
        )));
    }

    let mut names: HashSet<&str> = HashSet::new();
    for route in routes.values() {
        if !names.insert(route.name.as_str()) {
            return Err(DomainError::IntegrityViolation(format!(
                "duplicate route name '{}'",
                route.name
            )));
        }
    }

    if !has_dense_order(routes) {
        return Err(DomainError::IntegrityViolation(String::from(
            "route orders are not a dense permutation",
        )));
    }

    let mut ids: HashSet<&StudentId> = HashSet::new();
    let mut codes: HashSet<&StudentCode> = HashSet::new();
    let mut tickets: HashSet<(&RouteId, u32)> = HashSet::new();
    for student in students {
        if !routes.contains_key(&student.route) {
            return Err(DomainError::IntegrityViolation(format!(
                "student '{}' references unknown route '{}'",
                student.id, student.route
            )));
        }
        if !ids.insert(&student.id) {
            return Err(DomainError::IntegrityViolation(format!(
                "duplicate student id '{}'",
                student.id
            )));
        }
        if !codes.insert(&student.code) {
            return Err(DomainError::IntegrityViolation(format!(
                "duplicate student code '{}'",
                student.code
            )));
        }
        if !tickets.insert((&student.route, student.ticket_number.value())) {
            return Err(DomainError::IntegrityViolation(format!(
                "duplicate ticket {} on route '{}'",
                student.ticket_number, student.route
            )));
        }
    }

    Ok(())
}
