// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authorization types and services.
//!
//! This is an authorization gate, not a credential system: callers are
//! trusted to say who they are, and this module decides what that role may
//! do.

use rideboard_audit::Actor;

use crate::error::AuthError;

/// Actor roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Admin role: transport coordinators.
    ///
    /// Admins may perform:
    /// - route creation, configuration, reordering and deletion
    /// - manual registration, edits, status changes and deletions
    /// - clarification management
    Admin,
    /// Rider role: students using the public form.
    ///
    /// Riders may register themselves and read routes and rosters.
    Rider,
}

impl Role {
    /// Returns the role name used in audit records and error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Rider => "rider",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "rider" => Ok(Self::Rider),
            other => Err(AuthError::UnknownRole(other.to_string())),
        }
    }
}

/// An authenticated actor with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Converts this authenticated actor into an audit Actor.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        Actor::new(self.id.clone(), self.role.as_str().to_string())
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that an actor may perform an administrative action.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    /// * `action` - The action name, used in the error
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_admin(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Rider => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("Admin"),
            }),
        }
    }
}
