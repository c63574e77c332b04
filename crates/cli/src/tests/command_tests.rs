// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rideboard_api::{AuthenticatedActor, Role};
use rideboard_persistence::StoreConfig;
use serde_json::Value;
use tempfile::TempDir;

use super::{create_test_store, parse, run};

const LUCIA: [&str; 12] = [
    "--name",
    "Lucia",
    "--last-name",
    "Huaman",
    "--code",
    "20230001A",
    "--faculty",
    "FIIS",
    "--route",
    "Norte",
    "--phone",
    "987654321",
];

fn with_student(command: &str) -> Vec<&str> {
    std::iter::once(command).chain(LUCIA).collect()
}

#[test]
fn test_routes_prints_seeded_routes_as_json() {
    let mut store = create_test_store();

    let output: String = run(&mut store, &["routes"]).unwrap();
    let routes: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(routes.as_array().unwrap().len(), 5);
    assert_eq!(routes[0]["name"], "Norte");
    assert_eq!(routes[4]["route_id"], "sur");
}

#[test]
fn test_register_then_list_students() {
    let mut store = create_test_store();

    let registered: Value =
        serde_json::from_str(&run(&mut store, &with_student("register")).unwrap()).unwrap();
    let students: Value =
        serde_json::from_str(&run(&mut store, &["students", "--search", "huaman"]).unwrap())
            .unwrap();

    assert_eq!(registered["ticket_number"], 1);
    assert_eq!(students[0]["code"], "20230001A");
    assert_eq!(students[0]["route"], "Norte");
}

#[test]
fn test_rider_cannot_add_route() {
    let mut store = create_test_store();
    let rider: AuthenticatedActor = AuthenticatedActor::new(String::from("kiosk"), Role::Rider);

    let result = parse(&["add-route", "--name", "Callao"])
        .command
        .run(&mut store, &rider);

    let message: String = result.unwrap_err().to_string();
    assert!(message.contains("requires Admin role"));
}

#[test]
fn test_block_makes_self_service_fail_but_manual_succeed() {
    let mut store = create_test_store();
    run(&mut store, &["block", "--code", "20230001A", "--reason", "Debt"]).unwrap();

    let check: Value =
        serde_json::from_str(&run(&mut store, &["check-code", "20230001A"]).unwrap()).unwrap();
    assert_eq!(check["blocked"], true);
    assert_eq!(check["registered"], false);

    assert!(run(&mut store, &with_student("register")).is_err());
    assert!(run(&mut store, &with_student("register-manual")).is_ok());
}

#[test]
fn test_roster_is_written_to_file() {
    let dir: TempDir = TempDir::new().unwrap();
    let path = dir.path().join("norte.csv");
    let mut store = create_test_store();
    run(&mut store, &with_student("register")).unwrap();

    let output: String = run(
        &mut store,
        &["roster", "Norte", "--output", path.to_str().unwrap()],
    )
    .unwrap();

    assert!(output.is_empty());
    let csv: String = std::fs::read_to_string(&path).unwrap();
    assert!(csv.starts_with("Route,Norte\nSubtitle,"));
    assert!(csv.contains("\nTicket,Name,Code,Phone,Faculty,Boarded\n"));
    assert!(csv.ends_with("Total,1\n"));
    assert!(csv.contains("1,Lucia Huaman,20230001A,987654321,FIIS,Pending"));
}

#[test]
fn test_changes_persist_across_invocations_with_data_dir() {
    let dir: TempDir = TempDir::new().unwrap();
    let config: StoreConfig = StoreConfig::with_data_dir(dir.path());

    let mut first = config.open().unwrap();
    run(&mut first, &["reorder-route", "Ate", "0"]).unwrap();
    run(&mut first, &["clear-route", "Sur"]).unwrap();
    run(&mut first, &["delete-route", "Sur"]).unwrap();
    drop(first);

    let mut second = config.open().unwrap();
    let routes: Value = serde_json::from_str(&run(&mut second, &["routes"]).unwrap()).unwrap();
    let names: Vec<&str> = routes
        .as_array()
        .unwrap()
        .iter()
        .map(|route| route["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["Ate", "Norte", "Puente Piedra", "Este"]);
}
