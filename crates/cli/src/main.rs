// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # rideboard
//!
//! Command-line front end over the Rideboard API. Every invocation opens the
//! snapshot store, runs one operation as the given actor, and exits.
//!
//! Without `--data-dir` the store is in memory and starts from the default
//! routes, which is only useful for trying commands out.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use rideboard_api::{AuthError, AuthenticatedActor, Role};
use rideboard_persistence::{DEFAULT_SLOT, SnapshotStore, StoreConfig};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::commands::Command;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(args.log_level().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let mut store: SnapshotStore = args.open_store()?;
    let actor: AuthenticatedActor = args.actor();
    debug!("Running {:?} as {} ({})", args.command, actor.id, actor.role);

    let output: String = args.command.run(&mut store, &actor)?;
    if !output.is_empty() {
        println!("{output}");
    }

    if store.is_dirty() {
        store
            .flush()
            .wrap_err("Changes were applied but could not be saved")?;
    }
    Ok(())
}

fn parse_role(value: &str) -> Result<Role, AuthError> {
    value.parse::<Role>()
}

/// Rideboard - student transport registration
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the JSON snapshot. If not provided, uses an in-memory store.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Snapshot slot name
    #[arg(long, global = true, default_value = DEFAULT_SLOT)]
    slot: String,

    /// Role to act as (admin or rider)
    #[arg(long = "as", global = true, default_value = "admin", value_parser = parse_role)]
    role: Role,

    /// Actor id recorded in audit events
    #[arg(long, global = true, default_value = "cli")]
    actor: String,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn store_config(&self) -> StoreConfig {
        let config: StoreConfig = self
            .data_dir
            .as_ref()
            .map_or_else(StoreConfig::in_memory, |dir| {
                StoreConfig::with_data_dir(dir.clone())
            });
        config.with_slot(&self.slot)
    }

    fn open_store(&self) -> Result<SnapshotStore> {
        match &self.data_dir {
            Some(dir) => info!("Using snapshot directory at: {}", dir.display()),
            None => info!("Using in-memory snapshot store"),
        }
        self.store_config()
            .open()
            .wrap_err("Failed to open snapshot store")
    }

    fn actor(&self) -> AuthenticatedActor {
        AuthenticatedActor::new(self.actor.clone(), self.role)
    }
}

#[cfg(test)]
mod tests;
