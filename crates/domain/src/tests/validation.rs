// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_clarification, create_test_details, create_test_student, create_test_table,
};
use crate::{
    ClarificationDetails, DomainError, RouteId, RouteTable, Student, StudentCode, StudentDetails,
    StudentId, TicketNumber, is_code_blocked, is_code_registered, validate_clarification_details,
    validate_code_available, validate_code_not_blocked, validate_route_name,
    validate_snapshot_integrity, validate_student_details,
};

#[test]
fn test_validate_student_details_accepts_complete_input() {
    let details: StudentDetails = create_test_details("20241234A", &RouteId::new("norte"));
    assert!(validate_student_details(&details).is_ok());
}

#[test]
fn test_validate_student_details_rejects_blank_fields() {
    let base: StudentDetails = create_test_details("20241234A", &RouteId::new("norte"));

    let mut details: StudentDetails = base.clone();
    details.name = String::from("   ");
    assert!(matches!(
        validate_student_details(&details),
        Err(DomainError::InvalidStudentField { field: "name", .. })
    ));

    let mut details: StudentDetails = base.clone();
    details.last_name = String::new();
    assert!(matches!(
        validate_student_details(&details),
        Err(DomainError::InvalidStudentField {
            field: "last name",
            ..
        })
    ));

    let mut details: StudentDetails = base.clone();
    details.code = StudentCode::new("");
    assert!(matches!(
        validate_student_details(&details),
        Err(DomainError::InvalidStudentField { field: "code", .. })
    ));

    let mut details: StudentDetails = base;
    details.phone = String::from("\t");
    assert!(matches!(
        validate_student_details(&details),
        Err(DomainError::InvalidStudentField { field: "phone", .. })
    ));
}

#[test]
fn test_validate_clarification_details_requires_code() {
    let details: ClarificationDetails = ClarificationDetails {
        name: String::new(),
        last_name: String::new(),
        code: StudentCode::new(" "),
        phone: String::new(),
        reason: String::new(),
    };
    assert!(matches!(
        validate_clarification_details(&details),
        Err(DomainError::InvalidClarificationField { field: "code", .. })
    ));
}

#[test]
fn test_code_registration_and_block_lookups() {
    let route: RouteId = RouteId::new("norte");
    let students: Vec<Student> = vec![create_test_student("A1", &route, 1)];
    let clarifications = vec![create_test_clarification("B1")];

    assert!(is_code_registered(&StudentCode::new("A1"), &students));
    assert!(!is_code_registered(&StudentCode::new("B1"), &students));
    assert!(is_code_blocked(&StudentCode::new("B1"), &clarifications));
    assert!(validate_code_not_blocked(&StudentCode::new("A1"), &clarifications).is_ok());
}

#[test]
fn test_validate_code_available_ignores_the_edited_record() {
    let route: RouteId = RouteId::new("norte");
    let students: Vec<Student> = vec![
        create_test_student("A1", &route, 1),
        create_test_student("A2", &route, 2),
    ];
    let own_id: StudentId = students[0].id.clone();

    assert!(validate_code_available(&StudentCode::new("A1"), &students, Some(&own_id)).is_ok());
    assert!(matches!(
        validate_code_available(&StudentCode::new("A2"), &students, Some(&own_id)),
        Err(DomainError::CodeTaken { .. })
    ));
}

#[test]
fn test_validate_route_name_rejects_blank_and_duplicates() {
    let routes: RouteTable = create_test_table(&["Norte", "Sur"]);

    assert!(validate_route_name("Lima Centro", &routes, None).is_ok());
    assert!(matches!(
        validate_route_name("  ", &routes, None),
        Err(DomainError::InvalidRouteName(_))
    ));
    assert_eq!(
        validate_route_name("Sur", &routes, None),
        Err(DomainError::DuplicateRouteName(String::from("Sur")))
    );
    assert!(validate_route_name("Sur", &routes, Some(&RouteId::new("sur"))).is_ok());
}

#[test]
fn test_snapshot_integrity_accepts_consistent_state() {
    let routes: RouteTable = create_test_table(&["Norte", "Sur"]);
    let students: Vec<Student> = vec![
        create_test_student("A1", &RouteId::new("norte"), 1),
        create_test_student("A2", &RouteId::new("sur"), 1),
    ];
    assert!(validate_snapshot_integrity(&routes, &students).is_ok());
}

#[test]
fn test_snapshot_integrity_rejects_dangling_route_reference() {
    let routes: RouteTable = create_test_table(&["Norte"]);
    let students: Vec<Student> = vec![create_test_student("A1", &RouteId::new("lima"), 1)];
    assert!(matches!(
        validate_snapshot_integrity(&routes, &students),
        Err(DomainError::IntegrityViolation(_))
    ));
}

#[test]
fn test_snapshot_integrity_rejects_duplicate_ticket_on_route() {
    let routes: RouteTable = create_test_table(&["Norte"]);
    let route: RouteId = RouteId::new("norte");
    let mut duplicate: Student = create_test_student("A2", &route, 1);
    duplicate.ticket_number = TicketNumber::new(1);
    let students: Vec<Student> = vec![create_test_student("A1", &route, 1), duplicate];

    assert!(matches!(
        validate_snapshot_integrity(&routes, &students),
        Err(DomainError::IntegrityViolation(_))
    ));
}

#[test]
fn test_snapshot_integrity_rejects_gapped_orders() {
    let mut routes: RouteTable = create_test_table(&["Norte", "Sur"]);
    routes.get_mut(&RouteId::new("sur")).unwrap().order = 3;
    assert!(matches!(
        validate_snapshot_integrity(&routes, &[]),
        Err(DomainError::IntegrityViolation(_))
    ));
}
