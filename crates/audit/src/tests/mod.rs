// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Action, Actor, AuditEvent, Cause, StateSummary};

#[test]
fn test_actor_creation_requires_all_fields() {
    let actor: Actor = Actor::new(String::from("admin-1"), String::from("admin"));

    assert_eq!(actor.id, "admin-1");
    assert_eq!(actor.actor_type, "admin");
}

#[test]
fn test_action_creation_with_details() {
    let action: Action = Action::new(
        String::from("RegisterStudent"),
        Some(String::from("Ticket 3 on route 'norte'")),
    );

    assert_eq!(action.name, "RegisterStudent");
    assert_eq!(
        action.details,
        Some(String::from("Ticket 3 on route 'norte'"))
    );
}

#[test]
fn test_state_summary_display() {
    let summary: StateSummary = StateSummary::new(5, 12, 1);
    assert_eq!(summary.to_string(), "routes=5,students=12,clarifications=1");
}

#[test]
fn test_audit_event_captures_before_and_after() {
    let event: AuditEvent = AuditEvent::new(
        Actor::new(String::from("kiosk"), String::from("rider")),
        Cause::new(String::from("req-1"), String::from("Self-service form")),
        Action::new(String::from("RegisterStudent"), None),
        StateSummary::new(5, 0, 0),
        StateSummary::new(5, 1, 0),
    );

    assert_eq!(event.before.students, 0);
    assert_eq!(event.after.students, 1);
    assert_eq!(event.cause.id, "req-1");
    assert_eq!(event.clone(), event);
}
