// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod args_tests;
mod command_tests;

use clap::Parser;
use rideboard_api::{AuthenticatedActor, Role};
use rideboard_persistence::{SnapshotStore, StoreConfig};

use crate::Args;

pub fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("rideboard").chain(args.iter().copied()))
        .expect("Failed to parse arguments")
}

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("cli-admin"), Role::Admin)
}

pub fn create_test_store() -> SnapshotStore {
    StoreConfig::in_memory().open().unwrap()
}

/// Parses `args` and runs the resulting command against `store` as an admin.
pub fn run(store: &mut SnapshotStore, args: &[&str]) -> color_eyre::Result<String> {
    parse(args).command.run(store, &create_test_admin())
}
