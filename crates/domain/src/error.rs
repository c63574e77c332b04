// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
///
/// Registration rejections are ordinary values of this type; callers surface
/// them to the user rather than treating them as failures of the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The code is held by a clarification entry.
    CodeBlocked {
        /// The blocked code.
        code: String,
    },
    /// The code already belongs to a registered student.
    CodeTaken {
        /// The duplicate code.
        code: String,
    },
    /// The route is not accepting self-service registrations.
    RouteInactive {
        /// The route display name.
        route: String,
    },
    /// The route has no free seats.
    RouteFull {
        /// The route display name.
        route: String,
        /// The route capacity.
        capacity: usize,
    },
    /// The route has issued every ticket number it can represent.
    TicketsExhausted {
        /// The route display name.
        route: String,
    },
    /// The route cannot be deleted while students reference it.
    RouteHasStudents {
        /// The route display name.
        route: String,
        /// How many students still reference the route.
        student_count: usize,
    },
    /// No route matches the given name or id.
    RouteNotFound(String),
    /// No student matches the given id.
    StudentNotFound(String),
    /// No clarification matches the given id.
    ClarificationNotFound(String),
    /// Another route already uses this display name.
    DuplicateRouteName(String),
    /// Route name is empty or invalid.
    InvalidRouteName(String),
    /// Requested route position is outside the dense order range.
    InvalidRouteOrder {
        /// The requested position.
        requested: usize,
        /// The number of routes.
        route_count: usize,
    },
    /// A required student field is empty or invalid.
    InvalidStudentField {
        /// The offending field.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },
    /// A required clarification field is empty or invalid.
    InvalidClarificationField {
        /// The offending field.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },
    /// Faculty abbreviation is not recognized.
    InvalidFaculty(String),
    /// Student status is not recognized.
    InvalidStatus(String),
    /// A state invariant does not hold.
    IntegrityViolation(String),
}

impl DomainError {
    /// Returns a stable, machine-readable name for this rule violation.
    #[must_use]
    pub const fn rule(&self) -> &'static str {
        match self {
            Self::CodeBlocked { .. } => "CodeBlocked",
            Self::CodeTaken { .. } => "CodeTaken",
            Self::RouteInactive { .. } => "RouteInactive",
            Self::RouteFull { .. } => "RouteFull",
            Self::TicketsExhausted { .. } => "TicketsExhausted",
            Self::RouteHasStudents { .. } => "RouteHasStudents",
            Self::RouteNotFound(_) => "RouteNotFound",
            Self::StudentNotFound(_) => "StudentNotFound",
            Self::ClarificationNotFound(_) => "ClarificationNotFound",
            Self::DuplicateRouteName(_) => "DuplicateRouteName",
            Self::InvalidRouteName(_) => "InvalidRouteName",
            Self::InvalidRouteOrder { .. } => "InvalidRouteOrder",
            Self::InvalidStudentField { .. } => "InvalidStudentField",
            Self::InvalidClarificationField { .. } => "InvalidClarificationField",
            Self::InvalidFaculty(_) => "InvalidFaculty",
            Self::InvalidStatus(_) => "InvalidStatus",
            Self::IntegrityViolation(_) => "IntegrityViolation",
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CodeBlocked { code } => {
                write!(f, "Code '{code}' is pending clarification and cannot self-register")
            }
            Self::CodeTaken { code } => {
                write!(f, "Code '{code}' is already registered")
            }
            Self::RouteInactive { route } => {
                write!(f, "Route '{route}' is not accepting registrations")
            }
            Self::RouteFull { route, capacity } => {
                write!(f, "Route '{route}' is full ({capacity} seats)")
            }
            Self::TicketsExhausted { route } => {
                write!(f, "Route '{route}' has no ticket numbers left to issue")
            }
            Self::RouteHasStudents {
                route,
                student_count,
            } => {
                write!(
                    f,
                    "Route '{route}' cannot be deleted: {student_count} students are registered on it"
                )
            }
            Self::RouteNotFound(route) => write!(f, "Route '{route}' not found"),
            Self::StudentNotFound(id) => write!(f, "Student '{id}' not found"),
            Self::ClarificationNotFound(id) => write!(f, "Clarification '{id}' not found"),
            Self::DuplicateRouteName(name) => write!(f, "Route '{name}' already exists"),
            Self::InvalidRouteName(msg) => write!(f, "Invalid route name: {msg}"),
            Self::InvalidRouteOrder {
                requested,
                route_count,
            } => {
                write!(
                    f,
                    "Invalid route position {requested}: must be less than {route_count}"
                )
            }
            Self::InvalidStudentField { field, message } => {
                write!(f, "Invalid student {field}: {message}")
            }
            Self::InvalidClarificationField { field, message } => {
                write!(f, "Invalid clarification {field}: {message}")
            }
            Self::InvalidFaculty(value) => write!(f, "Unknown faculty: {value}"),
            Self::InvalidStatus(value) => write!(f, "Unknown student status: {value}"),
            Self::IntegrityViolation(msg) => write!(f, "State integrity violation: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
