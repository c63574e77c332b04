// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rideboard::{Command, CoreError, RegistrationMode, State, TransitionResult, apply};
use rideboard_audit::{Actor, Cause};
use rideboard_domain::{Faculty, RouteId, StudentCode, StudentDetails, StudentId, Timestamp};

use crate::{PersistenceError, SnapshotBackend};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("test-actor"), String::from("system"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("test-cause"), String::from("Test operation"))
}

pub fn register_command(code: &str, route: &str) -> Command {
    Command::RegisterStudent {
        student_id: StudentId::new(&format!("student-{code}")),
        details: StudentDetails {
            name: String::from("Ana"),
            last_name: String::from("Quispe"),
            code: StudentCode::new(code),
            faculty: Faculty::FIIS,
            route: RouteId::new(route),
            phone: String::from("987654321"),
        },
        registered_at: Timestamp::from_unix_millis(1_767_225_600_000),
        mode: RegistrationMode::SelfService,
    }
}

pub fn transition(state: &State, command: Command) -> Result<TransitionResult, CoreError> {
    apply(state, command, create_test_actor(), create_test_cause())
}

/// A backend whose reads and writes can be made to fail. The handles are
/// shared so a test can inspect and toggle it after handing it to a store.
#[derive(Debug, Clone, Default)]
pub struct FlakyBackend {
    pub stored: Rc<RefCell<Option<String>>>,
    pub fail_saves: Rc<Cell<bool>>,
    pub fail_loads: Rc<Cell<bool>>,
    pub saves: Rc<Cell<usize>>,
}

impl SnapshotBackend for FlakyBackend {
    fn load(&self, _slot: &str) -> Result<Option<String>, PersistenceError> {
        if self.fail_loads.get() {
            return Err(PersistenceError::Io(String::from("device not ready")));
        }
        Ok(self.stored.borrow().clone())
    }

    fn save(&mut self, _slot: &str, payload: &str) -> Result<(), PersistenceError> {
        if self.fail_saves.get() {
            return Err(PersistenceError::Io(String::from("disk full")));
        }
        self.saves.set(self.saves.get() + 1);
        *self.stored.borrow_mut() = Some(payload.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        String::from("flaky")
    }
}
