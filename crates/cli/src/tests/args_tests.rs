// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::Parser;
use rideboard_api::Role;
use rideboard_persistence::{BackendKind, DEFAULT_SLOT};
use std::path::PathBuf;

use crate::Args;
use crate::commands::Command;

use super::parse;

#[test]
fn test_defaults_to_in_memory_admin() {
    let args = parse(&["routes"]);

    assert!(args.data_dir.is_none());
    assert_eq!(args.slot, DEFAULT_SLOT);
    assert_eq!(args.role, Role::Admin);
    assert_eq!(args.actor().id, "cli");
    assert_eq!(args.store_config().backend, BackendKind::Memory);
}

#[test]
fn test_global_flags_after_subcommand() {
    let args = parse(&[
        "students",
        "--route",
        "Norte",
        "--data-dir",
        "/var/lib/rideboard",
        "--slot",
        "spring",
        "--as",
        "rider",
    ]);

    assert_eq!(args.role, Role::Rider);
    assert_eq!(args.slot, "spring");
    assert_eq!(
        args.store_config().backend,
        BackendKind::File(PathBuf::from("/var/lib/rideboard"))
    );
    assert!(matches!(
        args.command,
        Command::Students { route: Some(ref route), search: None } if route == "Norte"
    ));
}

#[test]
fn test_unknown_role_is_rejected() {
    let result = Args::try_parse_from(["rideboard", "--as", "driver", "routes"]);

    assert!(result.is_err());
}

#[test]
fn test_register_requires_every_field() {
    let result = Args::try_parse_from([
        "rideboard",
        "register",
        "--name",
        "Lucia",
        "--code",
        "20230001A",
    ]);

    assert!(result.is_err());
}

#[test]
fn test_update_route_parses_active_flag() {
    let args = parse(&["update-route", "Ate", "--active", "false", "--capacity", "30"]);

    assert!(matches!(
        args.command,
        Command::UpdateRoute {
            active: Some(false),
            capacity: Some(30),
            ..
        }
    ));
}
