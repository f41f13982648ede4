// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod forms_tests;
mod scheduler_tests;

use crate::{Console, ConsoleReply, ConsoleSettings, ManualClock};
use patrol_log_persistence::MemoryStore;
use time::OffsetDateTime;
use time::macros::datetime;

/// A fixed "now" used across console tests: 2026-03-14 09:30 UTC.
pub fn test_now() -> OffsetDateTime {
    datetime!(2026-03-14 09:30 UTC)
}

pub fn open_console(store: MemoryStore, clock: &ManualClock) -> Console<MemoryStore, ManualClock> {
    Console::open(store, clock.clone(), ConsoleSettings::default()).expect("console should open")
}

pub fn create_test_console() -> (Console<MemoryStore, ManualClock>, ManualClock) {
    let clock: ManualClock = ManualClock::new(test_now());
    let console: Console<MemoryStore, ManualClock> = open_console(MemoryStore::new(), &clock);
    (console, clock)
}

/// Submits each line one minute apart and returns the last reply.
pub fn submit_all(
    console: &mut Console<MemoryStore, ManualClock>,
    clock: &ManualClock,
    lines: &[&str],
) -> ConsoleReply {
    let mut reply: ConsoleReply = ConsoleReply::default();
    for line in lines {
        reply = console.submit(line);
        clock.advance(time::Duration::minutes(1));
    }
    reply
}
