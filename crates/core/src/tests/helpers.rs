// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, RegistrationMode, State, TransitionResult, apply};
use rideboard_audit::{Actor, Cause};
use rideboard_domain::{
    ClarificationDetails, ClarificationId, Faculty, RouteConfig, RouteId, RouteTable,
    StudentCode, StudentDetails, StudentId, TicketNumber, Timestamp, route_slug,
};

pub const DEFAULT_NAMES: [&str; 5] = ["Norte", "Puente Piedra", "Este", "Ate", "Sur"];

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("admin-123"), String::from("admin"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Admin request"))
}

pub fn create_test_route(name: &str, order: usize, capacity: usize) -> RouteConfig {
    RouteConfig {
        id: RouteId::new(&route_slug(name)),
        name: name.to_string(),
        subtitle: format!("Plaza {name} - UNI"),
        is_active: true,
        capacity,
        order,
        color: String::from("#22C55E"),
        last_ticket_issued: TicketNumber::NONE,
    }
}

pub fn create_test_state() -> State {
    let routes: RouteTable = DEFAULT_NAMES
        .iter()
        .enumerate()
        .map(|(order, name)| {
            let route: RouteConfig = create_test_route(name, order, 50);
            (route.id.clone(), route)
        })
        .collect();
    State::with_routes(routes)
}

pub fn create_test_details(code: &str, route: &str) -> StudentDetails {
    StudentDetails {
        name: String::from("Ana"),
        last_name: String::from("Quispe"),
        code: StudentCode::new(code),
        faculty: Faculty::FIIS,
        route: RouteId::new(route),
        phone: String::from("987654321"),
    }
}

pub fn student_id_for(code: &str) -> StudentId {
    StudentId::new(&format!("student-{code}"))
}

pub fn register_command(code: &str, route: &str, mode: RegistrationMode) -> Command {
    Command::RegisterStudent {
        student_id: student_id_for(code),
        details: create_test_details(code, route),
        registered_at: Timestamp::from_unix_millis(1_767_225_600_000),
        mode,
    }
}

pub fn clarification_command(code: &str) -> Command {
    Command::AddClarification {
        clarification_id: ClarificationId::new(&format!("clarification-{code}")),
        details: ClarificationDetails {
            name: String::from("Luis"),
            last_name: String::from("Huaman"),
            code: StudentCode::new(code),
            phone: String::from("912345678"),
            reason: String::from("Enrollment under review"),
        },
        created_at: Timestamp::from_unix_millis(1_767_225_600_000),
    }
}

/// Applies a command that is expected to succeed and returns the new state.
pub fn apply_ok(state: &State, command: Command) -> State {
    let result: TransitionResult =
        apply(state, command, create_test_actor(), create_test_cause()).unwrap();
    result.new_state
}

/// Registers `count` students on a route through self-service.
pub fn fill_route(state: &State, route: &str, count: usize) -> State {
    (0..count).fold(state.clone(), |current, n| {
        apply_ok(
            &current,
            register_command(&format!("{route}-{n:04}"), route, RegistrationMode::SelfService),
        )
    })
}
