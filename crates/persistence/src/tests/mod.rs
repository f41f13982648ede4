// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod sqlite_tests;

use patrol_log::{CommandContext, State, interpret};
use patrol_log_domain::default_sites;
use time::OffsetDateTime;
use time::macros::datetime;

pub fn test_now() -> OffsetDateTime {
    datetime!(2026-03-14 09:30 UTC)
}

/// Builds a state by running command lines one minute apart.
pub fn create_test_state(lines: &[&str]) -> State {
    let mut state: State = State::new(default_sites());
    let mut now: OffsetDateTime = test_now();
    for line in lines {
        let ctx: CommandContext = CommandContext::new(now, chrono_tz::UTC);
        state = interpret(&state, line, &ctx)
            .expect("command should succeed")
            .expect("command should not be blank")
            .new_state;
        now += time::Duration::minutes(1);
    }
    state
}
