// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::EntityId;
use time::OffsetDateTime;

/// Issues identifiers from clock readings in milliseconds.
///
/// Two records created within the same millisecond, or after the wall clock
/// stepped backwards, still receive strictly increasing identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Creates a generator that has not issued anything yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Issues the next identifier for a record created at `now`.
    pub fn next_id(&mut self, now: OffsetDateTime) -> EntityId {
        let millis: u64 = u64::try_from(now.unix_timestamp_nanos() / 1_000_000).unwrap_or(0);
        let value: u64 = millis.max(self.last.saturating_add(1));
        self.last = value;
        EntityId::new(value)
    }

    /// Records an identifier issued elsewhere so later ones sort after it.
    pub fn observe(&mut self, id: EntityId) {
        self.last = self.last.max(id.value());
    }

    /// Returns the most recently issued or observed value.
    #[must_use]
    pub const fn last_issued(&self) -> u64 {
        self.last
    }
}
