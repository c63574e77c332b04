// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Route registry tests through the API boundary.

use crate::{
    AddRouteRequest, ApiError, UpdateRouteRequest, add_route, can_delete_route, delete_route,
    delete_students_on_route, list_routes, list_students, register_self_service, reorder_routes,
    route_color, update_route_config,
};

use super::helpers::{
    create_registration, create_test_admin, create_test_cause, create_test_rider,
    create_test_store, fill_route, register_as_rider,
};

fn create_route_request(name: &str, capacity: usize) -> AddRouteRequest {
    AddRouteRequest {
        name: name.to_string(),
        subtitle: format!("Plaza {name} - UNI"),
        is_active: true,
        capacity,
        color: String::from("#14B8A6"),
    }
}

fn route_names(store: &rideboard_persistence::SnapshotStore) -> Vec<String> {
    list_routes(store).into_iter().map(|route| route.name).collect()
}

#[test]
fn test_list_routes_returns_seeded_routes_in_order() {
    let store = create_test_store();

    let routes = list_routes(&store);

    assert_eq!(
        route_names(&store),
        vec!["Norte", "Puente Piedra", "Este", "Ate", "Sur"]
    );
    assert!(routes.iter().all(|route| route.capacity == 50));
    assert!(routes.iter().all(|route| route.remaining == 50));
    assert_eq!(routes[1].route_id, "puente-piedra");
}

#[test]
fn test_list_routes_reports_occupancy() {
    let mut store = create_test_store();
    fill_route(&mut store, "Este", "E", 3);

    let este = list_routes(&store)
        .into_iter()
        .find(|route| route.name == "Este")
        .unwrap();

    assert_eq!(este.registered, 3);
    assert_eq!(este.remaining, 47);
    assert_eq!(este.boarded, 0);
}

#[test]
fn test_add_route_appends_with_slug_id() {
    let mut store = create_test_store();

    let result = add_route(
        &mut store,
        create_route_request("San Juan  de Lurigancho", 40),
        &create_test_admin(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(result.response.route.order, 5);
    assert_eq!(result.response.route.route_id, "san-juan-de-lurigancho");
    assert_eq!(result.response.route.capacity, 40);
    assert_eq!(result.audit_event.action.name, "AddRoute");
}

#[test]
fn test_add_route_rejects_duplicate_and_blank_names() {
    let mut store = create_test_store();

    let duplicate = add_route(
        &mut store,
        create_route_request("Norte", 10),
        &create_test_admin(),
        create_test_cause(),
    );
    let blank = add_route(
        &mut store,
        create_route_request("   ", 10),
        &create_test_admin(),
        create_test_cause(),
    );

    assert_eq!(duplicate.unwrap_err().rule(), Some("DuplicateRouteName"));
    assert!(matches!(blank, Err(ApiError::InvalidInput { .. })));
    assert_eq!(list_routes(&store).len(), 5);
}

#[test]
fn test_renamed_route_keeps_its_students() {
    let mut store = create_test_store();
    register_as_rider(&mut store, "20230001A", "Norte");

    let result = update_route_config(
        &mut store,
        "Norte",
        UpdateRouteRequest {
            name: Some(String::from("Norte Express")),
            color: Some(String::from("#0EA5E9")),
            ..UpdateRouteRequest::default()
        },
        &create_test_admin(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(result.response.route.name, "Norte Express");
    assert_eq!(result.response.route.route_id, "norte");
    assert_eq!(result.response.route.order, 0);
    assert_eq!(result.response.route.registered, 1);

    let students = list_students(&store, Some("Norte Express"), None).unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].route, "Norte Express");
    assert!(list_students(&store, Some("Norte"), None).is_err());
}

#[test]
fn test_rename_onto_existing_name_is_rejected() {
    let mut store = create_test_store();

    let result = update_route_config(
        &mut store,
        "Norte",
        UpdateRouteRequest {
            name: Some(String::from("Sur")),
            ..UpdateRouteRequest::default()
        },
        &create_test_admin(),
        create_test_cause(),
    );

    assert_eq!(result.unwrap_err().rule(), Some("DuplicateRouteName"));
}

#[test]
fn test_lowering_capacity_below_count_only_blocks_new_registrations() {
    let mut store = create_test_store();
    fill_route(&mut store, "Sur", "S", 3);

    let result = update_route_config(
        &mut store,
        "Sur",
        UpdateRouteRequest {
            capacity: Some(2),
            ..UpdateRouteRequest::default()
        },
        &create_test_admin(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(result.response.route.registered, 3);
    assert_eq!(result.response.route.remaining, 0);

    let rejected = register_self_service(
        &mut store,
        create_registration("20230099X", "Sur"),
        &create_test_rider(),
        create_test_cause(),
    );
    assert_eq!(rejected.unwrap_err().rule(), Some("RouteFull"));
}

#[test]
fn test_zero_capacity_route_rejects_every_self_service_registration() {
    let mut store = create_test_store();
    add_route(
        &mut store,
        create_route_request("Callao", 0),
        &create_test_admin(),
        create_test_cause(),
    )
    .unwrap();

    let result = register_self_service(
        &mut store,
        create_registration("20230001A", "Callao"),
        &create_test_rider(),
        create_test_cause(),
    );

    assert_eq!(result.unwrap_err().rule(), Some("RouteFull"));
}

#[test]
fn test_single_seat_route_admits_exactly_one() {
    let mut store = create_test_store();
    add_route(
        &mut store,
        create_route_request("Callao", 1),
        &create_test_admin(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(register_as_rider(&mut store, "20230001A", "Callao").ticket_number, 1);
    let result = register_self_service(
        &mut store,
        create_registration("20230002B", "Callao"),
        &create_test_rider(),
        create_test_cause(),
    );

    assert_eq!(result.unwrap_err().rule(), Some("RouteFull"));
}

#[test]
fn test_route_with_students_cannot_be_deleted() {
    let mut store = create_test_store();
    register_as_rider(&mut store, "20230001A", "Este");
    let revision: u64 = store.revision();

    assert!(!can_delete_route(&store, "Este"));
    let result = delete_route(&mut store, "Este", &create_test_admin(), create_test_cause());

    assert_eq!(result.unwrap_err().rule(), Some("RouteHasStudents"));
    assert_eq!(store.revision(), revision);
    assert_eq!(list_routes(&store).len(), 5);
}

#[test]
fn test_clearing_a_route_allows_deletion_and_compacts_order() {
    let mut store = create_test_store();
    fill_route(&mut store, "Este", "E", 4);

    let cleared = delete_students_on_route(
        &mut store,
        "Este",
        &create_test_admin(),
        create_test_cause(),
    )
    .unwrap();
    assert_eq!(cleared.response.removed, 4);
    assert!(can_delete_route(&store, "Este"));

    delete_route(&mut store, "Este", &create_test_admin(), create_test_cause()).unwrap();

    let routes = list_routes(&store);
    let orders: Vec<usize> = routes.iter().map(|route| route.order).collect();
    assert_eq!(orders, vec![0, 1, 2, 3]);
    assert_eq!(route_names(&store), vec!["Norte", "Puente Piedra", "Ate", "Sur"]);
}

#[test]
fn test_clearing_an_empty_route_removes_nothing() {
    let mut store = create_test_store();

    let result = delete_students_on_route(
        &mut store,
        "Sur",
        &create_test_admin(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(result.response.removed, 0);
}

#[test]
fn test_can_delete_unknown_route_is_false() {
    let store = create_test_store();

    assert!(!can_delete_route(&store, "Callao"));
}

#[test]
fn test_reorder_moves_route_later() {
    let mut store = create_test_store();

    let result = reorder_routes(
        &mut store,
        "Norte",
        3,
        &create_test_admin(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(result.response.route.order, 3);
    assert_eq!(
        route_names(&store),
        vec!["Puente Piedra", "Este", "Ate", "Norte", "Sur"]
    );
}

#[test]
fn test_reorder_out_of_range_is_rejected() {
    let mut store = create_test_store();

    let result = reorder_routes(
        &mut store,
        "Norte",
        5,
        &create_test_admin(),
        create_test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "order"
    ));
}

#[test]
fn test_route_color_falls_back_for_unknown_route() {
    let store = create_test_store();

    assert_eq!(route_color(&store, "Ate"), "#EF4444");
    assert_eq!(route_color(&store, "Callao"), "#3B82F6");
}
