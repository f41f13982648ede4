// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{EntityId, Site};

/// The sites seeded into an empty site store.
#[must_use]
pub fn default_sites() -> Vec<Site> {
    [
        (
            "Main Lobby",
            "Front entrance, reception desk and visitor sign-in",
        ),
        (
            "North Parking Lot",
            "Staff parking, gate arm and lighting poles",
        ),
        (
            "Loading Dock",
            "Receiving bays, roll-up doors and dumpsters",
        ),
        ("Server Room", "Badge-controlled room on the second floor"),
        (
            "Perimeter Fence",
            "Full fence line including the rear service gate",
        ),
    ]
    .into_iter()
    .zip(1_u64..)
    .map(|((name, description), id)| Site {
        id: EntityId::new(id),
        name: String::from(name),
        description: String::from(description),
    })
    .collect()
}
