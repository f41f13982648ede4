// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod duration_tests;
mod types_tests;
mod validation_tests;

use time::OffsetDateTime;
use time::macros::datetime;

/// A fixed "now" used across domain tests: 2026-03-14 09:30 UTC.
pub fn test_now() -> OffsetDateTime {
    datetime!(2026-03-14 09:30 UTC)
}
