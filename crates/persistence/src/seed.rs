// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! First-run route set.

use rideboard::State;
use rideboard_domain::{RouteConfig, RouteId, RouteTable, TicketNumber, route_slug};

/// Seats per seeded route.
pub const DEFAULT_ROUTE_CAPACITY: usize = 50;

/// `(name, subtitle, color)` for each seeded route, in display order.
const DEFAULT_ROUTES: [(&str, &str, &str); 5] = [
    ("Norte", "Plaza Norte - UNI", "#3B82F6"),
    ("Puente Piedra", "Plaza Puente Piedra - UNI", "#22C55E"),
    ("Este", "Metro Santa Anita - UNI", "#F59E0B"),
    ("Ate", "Mall de Ate - UNI", "#EF4444"),
    ("Sur", "Plaza Sur - UNI", "#8B5CF6"),
];

/// Returns the route table a fresh installation starts with.
#[must_use]
pub fn default_routes() -> RouteTable {
    DEFAULT_ROUTES
        .iter()
        .enumerate()
        .map(|(order, (name, subtitle, color))| {
            let id: RouteId = RouteId::new(&route_slug(name));
            let route: RouteConfig = RouteConfig {
                id: id.clone(),
                name: (*name).to_string(),
                subtitle: (*subtitle).to_string(),
                is_active: true,
                capacity: DEFAULT_ROUTE_CAPACITY,
                order,
                color: (*color).to_string(),
                last_ticket_issued: TicketNumber::NONE,
            };
            (id, route)
        })
        .collect()
}

/// Returns the state a fresh installation starts with.
#[must_use]
pub fn seed_state() -> State {
    State::with_routes(default_routes())
}
