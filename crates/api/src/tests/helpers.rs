// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use rideboard_audit::Cause;
use rideboard_persistence::{DEFAULT_SLOT, MemoryBackend, SnapshotStore};

use crate::{
    AddClarificationRequest, AuthenticatedActor, RegisterStudentRequest, RegisterStudentResponse,
    Role, register_manually, register_self_service,
};

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("admin-123"), Role::Admin)
}

pub fn create_test_rider() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("rider-456"), Role::Rider)
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

/// Opens an in-memory store holding the five default routes.
pub fn create_test_store() -> SnapshotStore {
    SnapshotStore::open(Box::new(MemoryBackend::new()), DEFAULT_SLOT)
        .expect("Failed to open test store")
}

pub fn create_registration(code: &str, route: &str) -> RegisterStudentRequest {
    RegisterStudentRequest {
        name: String::from("Lucia"),
        last_name: String::from("Huaman"),
        code: String::from(code),
        faculty: String::from("FIIS"),
        route: String::from(route),
        phone: String::from("987654321"),
    }
}

pub fn create_clarification(code: &str) -> AddClarificationRequest {
    AddClarificationRequest {
        name: String::from("Jorge"),
        last_name: String::from("Rojas"),
        code: String::from(code),
        phone: String::from("912345678"),
        reason: String::from("Enrollment under review"),
    }
}

pub fn register_as_rider(
    store: &mut SnapshotStore,
    code: &str,
    route: &str,
) -> RegisterStudentResponse {
    register_self_service(
        store,
        create_registration(code, route),
        &create_test_rider(),
        create_test_cause(),
    )
    .expect("Self-service registration failed")
    .response
}

pub fn register_as_admin(
    store: &mut SnapshotStore,
    code: &str,
    route: &str,
) -> RegisterStudentResponse {
    register_manually(
        store,
        create_registration(code, route),
        &create_test_admin(),
        create_test_cause(),
    )
    .expect("Manual registration failed")
    .response
}

/// Registers `count` riders on `route` with codes `{prefix}{n:04}`.
pub fn fill_route(store: &mut SnapshotStore, route: &str, prefix: &str, count: usize) {
    for n in 1..=count {
        register_as_rider(store, &format!("{prefix}{n:04}"), route);
    }
}
