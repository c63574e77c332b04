// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Clarification, ClarificationDetails, ClarificationId, Faculty, RouteConfig, RouteId,
    RouteTable, Student, StudentCode, StudentDetails, StudentId, TicketNumber, Timestamp,
    route_slug,
};

pub fn create_test_route(name: &str, order: usize, capacity: usize) -> RouteConfig {
    RouteConfig {
        id: RouteId::new(&route_slug(name)),
        name: name.to_string(),
        subtitle: format!("Plaza {name} - UNI"),
        is_active: true,
        capacity,
        order,
        color: String::from("#3B82F6"),
        last_ticket_issued: TicketNumber::NONE,
    }
}

pub fn create_test_table(names: &[&str]) -> RouteTable {
    names
        .iter()
        .enumerate()
        .map(|(order, name)| {
            let route: RouteConfig = create_test_route(name, order, 50);
            (route.id.clone(), route)
        })
        .collect()
}

pub fn create_test_details(code: &str, route: &RouteId) -> StudentDetails {
    StudentDetails {
        name: String::from("Ana"),
        last_name: String::from("Quispe"),
        code: StudentCode::new(code),
        faculty: Faculty::FIIS,
        route: route.clone(),
        phone: String::from("987654321"),
    }
}

pub fn create_test_student(code: &str, route: &RouteId, ticket: u32) -> Student {
    Student::admit(
        StudentId::new(&format!("student-{code}")),
        create_test_details(code, route),
        TicketNumber::new(ticket),
        Timestamp::from_unix_millis(1_767_225_600_000),
    )
}

pub fn create_test_clarification(code: &str) -> Clarification {
    Clarification::new(
        ClarificationId::new(&format!("clarification-{code}")),
        ClarificationDetails {
            name: String::from("Luis"),
            last_name: String::from("Huaman"),
            code: StudentCode::new(code),
            phone: String::from("912345678"),
            reason: String::from("Enrollment under review"),
        },
        Timestamp::from_unix_millis(1_767_225_600_000),
    )
}

pub fn orders_by_name(routes: &RouteTable) -> Vec<(String, usize)> {
    let mut orders: Vec<(String, usize)> = routes
        .values()
        .map(|route| (route.name.clone(), route.order))
        .collect();
    orders.sort_by_key(|(_, order)| *order);
    orders
}
