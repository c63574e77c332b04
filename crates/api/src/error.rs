// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::export::ExportError;
use rideboard::CoreError;
use rideboard_domain::DomainError;
use rideboard_persistence::PersistenceError;

/// Authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The role name is not recognized.
    UnknownRole(String),
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRole(role) => {
                write!(f, "Unknown role '{role}': expected 'admin' or 'rider'")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the domain rule name if this is a rule violation.
    #[must_use]
    pub fn rule(&self) -> Option<&str> {
        match self {
            Self::DomainRuleViolation { rule, .. } => Some(rule.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UnknownRole(role) => Self::InvalidInput {
                field: String::from("role"),
                message: format!("Unknown role '{role}'"),
            },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// Lookups that miss become `ResourceNotFound`, malformed fields become
/// `InvalidInput`, and every registration or configuration rule becomes a
/// `DomainRuleViolation` named after the rule.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let rule: &'static str = err.rule();
    let message: String = err.to_string();
    match err {
        DomainError::RouteNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Route"),
            message,
        },
        DomainError::StudentNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Student"),
            message,
        },
        DomainError::ClarificationNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Clarification"),
            message,
        },
        DomainError::InvalidRouteName(_) => ApiError::InvalidInput {
            field: String::from("name"),
            message,
        },
        DomainError::InvalidRouteOrder { .. } => ApiError::InvalidInput {
            field: String::from("order"),
            message,
        },
        DomainError::InvalidStudentField { field, .. }
        | DomainError::InvalidClarificationField { field, .. } => ApiError::InvalidInput {
            field: field.to_string(),
            message,
        },
        DomainError::InvalidFaculty(_) => ApiError::InvalidInput {
            field: String::from("faculty"),
            message,
        },
        DomainError::InvalidStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message,
        },
        DomainError::CodeBlocked { .. }
        | DomainError::CodeTaken { .. }
        | DomainError::RouteInactive { .. }
        | DomainError::RouteFull { .. }
        | DomainError::TicketsExhausted { .. }
        | DomainError::RouteHasStudents { .. }
        | DomainError::DuplicateRouteName(_)
        | DomainError::IntegrityViolation(_) => ApiError::DomainRuleViolation {
            rule: rule.to_string(),
            message,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
