// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rideboard_domain::{
    ClarificationDetails, ClarificationId, RouteConfigPatch, RouteDefinition, RouteId,
    StudentDetails, StudentId, StudentStatus, Timestamp,
};

/// Which admission rules a registration is held to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationMode {
    /// The public form: clarification, active-route and capacity checks apply.
    SelfService,
    /// Administrator entry: only code uniqueness applies.
    Manual,
}

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request state changes. Generated values
/// (ids, timestamps) are supplied by the caller so that applying a command
/// is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a student on a route.
    RegisterStudent {
        /// The identity to assign to the new student.
        student_id: StudentId,
        /// The registration fields.
        details: StudentDetails,
        /// The admission time.
        registered_at: Timestamp,
        /// Which admission rules apply.
        mode: RegistrationMode,
    },
    /// Replace the editable fields of a student.
    UpdateStudent {
        /// The student to edit.
        student_id: StudentId,
        /// The new field values.
        details: StudentDetails,
        /// The new boarding status.
        status: StudentStatus,
    },
    /// Set a student's boarding status.
    SetStudentStatus {
        /// The student to update.
        student_id: StudentId,
        /// The new status.
        status: StudentStatus,
    },
    /// Remove one student.
    DeleteStudent {
        /// The student to remove.
        student_id: StudentId,
    },
    /// Remove every student registered on a route.
    DeleteStudentsOnRoute {
        /// The route to clear.
        route_id: RouteId,
    },
    /// Add a route at the end of the route order.
    AddRoute {
        /// The new route's fields.
        definition: RouteDefinition,
    },
    /// Shallow-merge changes into a route.
    UpdateRoute {
        /// The route to update.
        route_id: RouteId,
        /// The fields to change.
        patch: RouteConfigPatch,
    },
    /// Delete a route that no student references.
    DeleteRoute {
        /// The route to delete.
        route_id: RouteId,
    },
    /// Move a route to a new position in the route order.
    ReorderRoute {
        /// The route to move.
        route_id: RouteId,
        /// The target position.
        new_order: usize,
    },
    /// Block a student code from self-service registration.
    AddClarification {
        /// The identity to assign to the entry.
        clarification_id: ClarificationId,
        /// The entry fields.
        details: ClarificationDetails,
        /// The creation time.
        created_at: Timestamp,
    },
    /// Remove a clarification entry.
    DeleteClarification {
        /// The entry to remove.
        clarification_id: ClarificationId,
    },
}

impl Command {
    /// Returns the action name recorded in audit events for this command.
    #[must_use]
    pub const fn action_name(&self) -> &'static str {
        match self {
            Self::RegisterStudent {
                mode: RegistrationMode::SelfService,
                ..
            } => "RegisterStudent",
            Self::RegisterStudent {
                mode: RegistrationMode::Manual,
                ..
            } => "RegisterStudentManually",
            Self::UpdateStudent { .. } => "UpdateStudent",
            Self::SetStudentStatus { .. } => "SetStudentStatus",
            Self::DeleteStudent { .. } => "DeleteStudent",
            Self::DeleteStudentsOnRoute { .. } => "DeleteStudentsOnRoute",
            Self::AddRoute { .. } => "AddRoute",
            Self::UpdateRoute { .. } => "UpdateRoute",
            Self::DeleteRoute { .. } => "DeleteRoute",
            Self::ReorderRoute { .. } => "ReorderRoute",
            Self::AddClarification { .. } => "AddClarification",
            Self::DeleteClarification { .. } => "DeleteClarification",
        }
    }
}
