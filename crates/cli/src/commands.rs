// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subcommands and their dispatch onto the API handlers.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Subcommand};
use color_eyre::{Result, eyre::Context};
use rideboard_api::{
    AddClarificationRequest, AddRouteRequest, AuthenticatedActor, RegisterStudentRequest,
    RouteRoster, SetStudentStatusRequest, UpdateRouteRequest, UpdateStudentRequest,
    add_clarification, add_route, delete_clarification, delete_route, delete_student,
    delete_students_on_route, export_roster, is_code_blocked, is_code_registered,
    list_clarifications, list_routes, list_students, next_ticket_number, register_manually,
    register_self_service, reorder_routes, set_student_status, update_route_config,
    update_student,
};
use rideboard_audit::Cause;
use rideboard_persistence::SnapshotStore;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

/// Fields of a registration form.
#[derive(Clone, Debug, ClapArgs)]
pub struct StudentArgs {
    /// Given name
    #[arg(long)]
    name: String,

    /// Family name
    #[arg(long)]
    last_name: String,

    /// University code
    #[arg(long)]
    code: String,

    /// Faculty abbreviation (FAUA, FC, FIA, FIC, FIEECS, FIEE, FIGMM, FIIS, FIM, FIP, FIQT)
    #[arg(long)]
    faculty: String,

    /// Route display name
    #[arg(long)]
    route: String,

    /// Contact phone
    #[arg(long)]
    phone: String,
}

impl From<StudentArgs> for RegisterStudentRequest {
    fn from(args: StudentArgs) -> Self {
        Self {
            name: args.name,
            last_name: args.last_name,
            code: args.code,
            faculty: args.faculty,
            route: args.route,
            phone: args.phone,
        }
    }
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// List routes in display order with seat usage
    #[command(visible_alias = "r")]
    Routes,

    /// Add a route at the end of the order
    AddRoute {
        /// Display name
        #[arg(long)]
        name: String,

        /// Pickup point shown under the name
        #[arg(long, default_value = "")]
        subtitle: String,

        /// Seats available to self-service registration
        #[arg(long, default_value_t = 50)]
        capacity: usize,

        /// Display color
        #[arg(long, default_value = "#3B82F6")]
        color: String,

        /// Create the route closed to self-service registration
        #[arg(long)]
        inactive: bool,
    },

    /// Change a route's configuration
    UpdateRoute {
        /// Current display name
        route: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New subtitle
        #[arg(long)]
        subtitle: Option<String>,

        /// New capacity
        #[arg(long)]
        capacity: Option<usize>,

        /// New color
        #[arg(long)]
        color: Option<String>,

        /// Open or close self-service registration
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a route with no registered students
    DeleteRoute {
        /// Display name
        route: String,
    },

    /// Move a route to a new position
    ReorderRoute {
        /// Display name
        route: String,

        /// Target position, starting at 0
        position: usize,
    },

    /// Register through the public form rules
    Register(StudentArgs),

    /// Register as an administrator, bypassing capacity and clarification
    RegisterManual(StudentArgs),

    /// Replace a student's fields
    EditStudent {
        /// Student id
        student_id: String,

        #[command(flatten)]
        student: StudentArgs,

        /// New status (pending, boarded, no-show)
        #[arg(long)]
        status: Option<String>,
    },

    /// Set a student's boarding status
    SetStatus {
        /// Student id
        student_id: String,

        /// pending, boarded or no-show
        status: String,
    },

    /// Remove one student
    DeleteStudent {
        /// Student id
        student_id: String,
    },

    /// Remove every student on a route
    ClearRoute {
        /// Display name
        route: String,
    },

    /// List students ordered by ticket
    #[command(visible_alias = "s")]
    Students {
        /// Only students on this route
        #[arg(long)]
        route: Option<String>,

        /// Match against name, last name, code or phone
        #[arg(long)]
        search: Option<String>,
    },

    /// Show the next ticket a route would issue
    NextTicket {
        /// Display name
        route: String,
    },

    /// Report whether a code is registered or blocked
    CheckCode {
        /// University code
        code: String,
    },

    /// Block a code from self-service registration
    Block {
        /// Given name
        #[arg(long, default_value = "")]
        name: String,

        /// Family name
        #[arg(long, default_value = "")]
        last_name: String,

        /// The code to block
        #[arg(long)]
        code: String,

        /// Contact phone
        #[arg(long, default_value = "")]
        phone: String,

        /// Why the code is held back
        #[arg(long, default_value = "")]
        reason: String,
    },

    /// Remove a clarification entry
    Unblock {
        /// Clarification id
        clarification_id: String,
    },

    /// List clarification entries, newest first
    Clarifications,

    /// Export a route's roster as CSV
    Roster {
        /// Display name
        route: String,

        /// Write to this file instead of standard output
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct CodeStatus<'a> {
    code: &'a str,
    registered: bool,
    blocked: bool,
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).wrap_err("Failed to render output")
}

fn create_cause(command: &Command) -> Cause {
    Cause::new(
        Uuid::new_v4().to_string(),
        format!("rideboard {}", command.name()),
    )
}

impl Command {
    /// Returns the subcommand name as typed on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Routes => "routes",
            Self::AddRoute { .. } => "add-route",
            Self::UpdateRoute { .. } => "update-route",
            Self::DeleteRoute { .. } => "delete-route",
            Self::ReorderRoute { .. } => "reorder-route",
            Self::Register(_) => "register",
            Self::RegisterManual(_) => "register-manual",
            Self::EditStudent { .. } => "edit-student",
            Self::SetStatus { .. } => "set-status",
            Self::DeleteStudent { .. } => "delete-student",
            Self::ClearRoute { .. } => "clear-route",
            Self::Students { .. } => "students",
            Self::NextTicket { .. } => "next-ticket",
            Self::CheckCode { .. } => "check-code",
            Self::Block { .. } => "block",
            Self::Unblock { .. } => "unblock",
            Self::Clarifications => "clarifications",
            Self::Roster { .. } => "roster",
        }
    }

    /// Runs the command against `store` as `actor`.
    ///
    /// # Returns
    ///
    /// The text to print: JSON for most commands, CSV for a roster written
    /// to standard output, and nothing for a roster written to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation is rejected or the output cannot be
    /// rendered or written.
    #[allow(clippy::too_many_lines)]
    pub fn run(self, store: &mut SnapshotStore, actor: &AuthenticatedActor) -> Result<String> {
        let cause: Cause = create_cause(&self);

        match self {
            Self::Routes => to_json(&list_routes(store)),
            Self::AddRoute {
                name,
                subtitle,
                capacity,
                color,
                inactive,
            } => {
                let request: AddRouteRequest = AddRouteRequest {
                    name,
                    subtitle,
                    is_active: !inactive,
                    capacity,
                    color,
                };
                to_json(&add_route(store, request, actor, cause)?.response)
            }
            Self::UpdateRoute {
                route,
                name,
                subtitle,
                capacity,
                color,
                active,
            } => {
                let request: UpdateRouteRequest = UpdateRouteRequest {
                    name,
                    subtitle,
                    is_active: active,
                    capacity,
                    color,
                };
                to_json(&update_route_config(store, &route, request, actor, cause)?.response)
            }
            Self::DeleteRoute { route } => {
                to_json(&delete_route(store, &route, actor, cause)?.response)
            }
            Self::ReorderRoute { route, position } => {
                to_json(&reorder_routes(store, &route, position, actor, cause)?.response)
            }
            Self::Register(student) => {
                to_json(&register_self_service(store, student.into(), actor, cause)?.response)
            }
            Self::RegisterManual(student) => {
                to_json(&register_manually(store, student.into(), actor, cause)?.response)
            }
            Self::EditStudent {
                student_id,
                student,
                status,
            } => {
                let request: UpdateStudentRequest = UpdateStudentRequest {
                    student_id,
                    name: student.name,
                    last_name: student.last_name,
                    code: student.code,
                    faculty: student.faculty,
                    route: student.route,
                    phone: student.phone,
                    status,
                };
                to_json(&update_student(store, request, actor, cause)?.response)
            }
            Self::SetStatus { student_id, status } => {
                let request: SetStudentStatusRequest =
                    SetStudentStatusRequest { student_id, status };
                to_json(&set_student_status(store, request, actor, cause)?.response)
            }
            Self::DeleteStudent { student_id } => {
                to_json(&delete_student(store, &student_id, actor, cause)?.response)
            }
            Self::ClearRoute { route } => {
                to_json(&delete_students_on_route(store, &route, actor, cause)?.response)
            }
            Self::Students { route, search } => to_json(&list_students(
                store,
                route.as_deref(),
                search.as_deref(),
            )?),
            Self::NextTicket { route } => to_json(&next_ticket_number(store, &route)?),
            Self::CheckCode { code } => to_json(&CodeStatus {
                code: &code,
                registered: is_code_registered(store, &code),
                blocked: is_code_blocked(store, &code),
            }),
            Self::Block {
                name,
                last_name,
                code,
                phone,
                reason,
            } => {
                let request: AddClarificationRequest = AddClarificationRequest {
                    name,
                    last_name,
                    code,
                    phone,
                    reason,
                };
                to_json(&add_clarification(store, request, actor, cause)?.response)
            }
            Self::Unblock { clarification_id } => {
                to_json(&delete_clarification(store, &clarification_id, actor, cause)?.response)
            }
            Self::Clarifications => to_json(&list_clarifications(store)),
            Self::Roster { route, output } => {
                let today: time::Date = OffsetDateTime::now_utc().date();
                let roster: RouteRoster = export_roster(store, &route, today)?;
                let csv: String = roster.to_csv()?;
                match output {
                    Some(path) => {
                        std::fs::write(&path, csv)
                            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                        info!(
                            "Wrote {} rows for {} to: {}",
                            roster.total,
                            roster.route_name,
                            path.display()
                        );
                        Ok(String::new())
                    }
                    None => Ok(csv),
                }
            }
        }
    }
}
