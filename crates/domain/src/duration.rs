// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Duration rules shared by patrol stops, missions and reports.
//!
//! Durations are whole minutes, truncated, and rendered as `{hours}h {minutes}m`.
//! A span that ends before it starts is treated as zero.

use time::OffsetDateTime;

/// Returns the number of whole minutes between two instants, never negative.
#[must_use]
pub fn elapsed_minutes(start: OffsetDateTime, end: OffsetDateTime) -> i64 {
    (end - start).whole_minutes().max(0)
}

/// Formats a minute count as `{hours}h {minutes}m`.
#[must_use]
pub fn format_minutes(total_minutes: i64) -> String {
    let total: i64 = total_minutes.max(0);
    format!("{}h {}m", total / 60, total % 60)
}

/// Formats the span between two instants as `{hours}h {minutes}m`.
#[must_use]
pub fn format_duration(start: OffsetDateTime, end: OffsetDateTime) -> String {
    format_minutes(elapsed_minutes(start, end))
}
