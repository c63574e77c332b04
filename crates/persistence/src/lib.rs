// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Rideboard.
//!
//! This crate keeps the single durable snapshot of routes, students and
//! clarifications. It owns the current state in a [`SnapshotStore`] and
//! writes every commit to a [`SnapshotBackend`] slot as one JSON document.
//!
//! ## Backend Support
//!
//! - **memory** (default): used for unit tests and ephemeral runs
//! - **file**: one `<slot>.json` per slot inside a data directory
//!
//! ## First Run
//!
//! An empty slot is seeded with the default route set (see [`default_routes`])
//! and the seed is saved immediately.
//!
//! ## Testing Philosophy
//!
//! - Store behavior is tested against `MemoryBackend`
//! - File behavior is tested in temporary directories
//! - Snapshot round-trips are property tested over generated transitions

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

mod backend;
mod config;
mod data_models;
mod error;
mod seed;
mod store;

#[cfg(test)]
mod tests;

pub use backend::SnapshotBackend;
pub use backend::file::FileBackend;
pub use backend::memory::MemoryBackend;
pub use config::{BackendKind, DEFAULT_SLOT, StoreConfig};
pub use data_models::{SnapshotData, decode_snapshot, encode_snapshot};
pub use error::PersistenceError;
pub use seed::{DEFAULT_ROUTE_CAPACITY, default_routes, seed_state};
pub use store::SnapshotStore;
