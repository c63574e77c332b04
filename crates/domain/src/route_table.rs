// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Route table lookups and the dense route ordering algebra.
//!
//! ## Ordering Rules (Authoritative)
//!
//! Every route carries an `order`. Across all routes the orders form a
//! permutation of `0..N-1`:
//!
//! - Adding a route places it last (`max + 1`, or `0` on an empty table)
//! - Removing a route decrements every order above the removed one
//! - Moving a route to index `k` shifts the routes in between by one
//!
//! Each operation returns a complete new table. Orders are recomputed over
//! all routes at once, so no intermediate table with duplicate orders is
//! ever observable.
//!
//! ## Usage
//!
//! `sorted_routes` is the only iteration order used for display and
//! for anything else that needs "route order".

use crate::error::DomainError;
use crate::types::{RouteConfig, RouteId};
use std::collections::{BTreeMap, HashSet};

/// All configured routes keyed by their immutable id.
pub type RouteTable = BTreeMap<RouteId, RouteConfig>;

/// Finds a route by its display name (exact match).
#[must_use]
pub fn find_route_by_name<'a>(routes: &'a RouteTable, name: &str) -> Option<&'a RouteConfig> {
    routes.values().find(|route| route.name == name)
}

/// Returns the routes in ascending `order`.
///
/// The sort is stable; routes with equal order (only possible in a corrupt
/// table) keep id order.
#[must_use]
pub fn sorted_routes(routes: &RouteTable) -> Vec<&RouteConfig> {
    let mut sorted: Vec<&RouteConfig> = routes.values().collect();
    sorted.sort_by_key(|route| route.order);
    sorted
}

/// Returns the order a newly added route receives.
#[must_use]
pub fn next_route_order(routes: &RouteTable) -> usize {
    routes
        .values()
        .map(|route| route.order)
        .max()
        .map_or(0, |max| max + 1)
}

/// Derives the slug for a route name: lowercase, whitespace runs become `-`.
#[must_use]
pub fn route_slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<String>>()
        .join("-")
}

/// Derives a route id for `name` that is not yet used in `routes`.
///
/// The plain slug is used when free; otherwise `-2`, `-3`, ... is appended.
#[must_use]
pub fn unique_route_id(routes: &RouteTable, name: &str) -> RouteId {
    let slug: String = route_slug(name);
    let base: RouteId = RouteId::new(&slug);
    if !routes.contains_key(&base) {
        return base;
    }

    let mut suffix: usize = 2;
    loop {
        let candidate: RouteId = RouteId::new(&format!("{slug}-{suffix}"));
        if !routes.contains_key(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

/// Removes a route and compacts the orders of every route after it.
///
/// # Arguments
///
/// * `routes` - The current route table
/// * `route_id` - The route to remove
///
/// # Returns
///
/// The new table without the route.
///
/// # Errors
///
/// Returns `DomainError::RouteNotFound` if the route does not exist.
pub fn remove_route(routes: &RouteTable, route_id: &RouteId) -> Result<RouteTable, DomainError> {
    let removed_order: usize = routes
        .get(route_id)
        .map(|route| route.order)
        .ok_or_else(|| DomainError::RouteNotFound(route_id.value().to_string()))?;

    let compacted: RouteTable = routes
        .iter()
        .filter(|(id, _)| *id != route_id)
        .map(|(id, route)| {
            let mut next: RouteConfig = route.clone();
            if next.order > removed_order {
                next.order -= 1;
            }
            (id.clone(), next)
        })
        .collect();

    Ok(compacted)
}

/// Moves a route to a new position, shifting the routes in between.
///
/// Moving later (`old < new`): routes with `old < order <= new` shift down
/// by one. Moving earlier (`old > new`): routes with `new <= order < old`
/// shift up by one. The moved route then takes `new_order` exactly.
///
/// # Arguments
///
/// * `routes` - The current route table
/// * `route_id` - The route to move
/// * `new_order` - The target position, in `0..routes.len()`
///
/// # Errors
///
/// Returns an error if:
/// - The route does not exist
/// - `new_order` is outside `0..routes.len()`
pub fn move_route(
    routes: &RouteTable,
    route_id: &RouteId,
    new_order: usize,
) -> Result<RouteTable, DomainError> {
    let old_order: usize = routes
        .get(route_id)
        .map(|route| route.order)
        .ok_or_else(|| DomainError::RouteNotFound(route_id.value().to_string()))?;

    if new_order >= routes.len() {
        return Err(DomainError::InvalidRouteOrder {
            requested: new_order,
            route_count: routes.len(),
        });
    }

    let moved: RouteTable = routes
        .iter()
        .map(|(id, route)| {
            let mut next: RouteConfig = route.clone();
            if id == route_id {
                next.order = new_order;
            } else if old_order < new_order && next.order > old_order && next.order <= new_order
            {
                next.order -= 1;
            } else if old_order > new_order && next.order >= new_order && next.order < old_order
            {
                next.order += 1;
            }
            (id.clone(), next)
        })
        .collect();

    Ok(moved)
}

/// Returns true if route orders form a permutation of `0..routes.len()`.
#[must_use]
pub fn has_dense_order(routes: &RouteTable) -> bool {
    let orders: HashSet<usize> = routes.values().map(|route| route.order).collect();
    orders.len() == routes.len() && (0..routes.len()).all(|order| orders.contains(&order))
}
