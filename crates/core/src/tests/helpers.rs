// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CommandContext, CoreError, State, TransitionResult, interpret};
use patrol_log_domain::default_sites;
use time::OffsetDateTime;
use time::macros::datetime;

/// A fixed "now" used across core tests: 2026-03-14 09:30 UTC.
pub fn test_now() -> OffsetDateTime {
    datetime!(2026-03-14 09:30 UTC)
}

pub fn ctx_at(now: OffsetDateTime) -> CommandContext {
    CommandContext::new(now, chrono_tz::UTC)
}

pub fn create_test_state() -> State {
    State::new(default_sites())
}

/// Runs a line that is expected to succeed.
pub fn run(state: &State, line: &str, now: OffsetDateTime) -> TransitionResult {
    interpret(state, line, &ctx_at(now))
        .unwrap_or_else(|err| panic!("'{line}' failed: {err}"))
        .unwrap_or_else(|| panic!("'{line}' produced no transition"))
}

/// Runs a line that is expected to be rejected.
pub fn run_err(state: &State, line: &str, now: OffsetDateTime) -> CoreError {
    match interpret(state, line, &ctx_at(now)) {
        Err(err) => err,
        Ok(_) => panic!("'{line}' unexpectedly succeeded"),
    }
}

/// Runs a sequence of lines, each one minute apart starting at `test_now()`.
pub fn run_all(state: &State, lines: &[&str]) -> State {
    lines
        .iter()
        .enumerate()
        .fold(state.clone(), |current, (index, line)| {
            let minutes: i64 = i64::try_from(index).unwrap();
            let now: time::OffsetDateTime = test_now() + time::Duration::minutes(minutes);
            run(&current, line, now).new_state
        })
}
