// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{elapsed_minutes, format_duration, format_minutes};
use time::macros::datetime;

#[test]
fn test_format_minutes_splits_hours_and_minutes() {
    assert_eq!(format_minutes(0), "0h 0m");
    assert_eq!(format_minutes(59), "0h 59m");
    assert_eq!(format_minutes(60), "1h 0m");
    assert_eq!(format_minutes(485), "8h 5m");
}

#[test]
fn test_format_minutes_clamps_negative_values() {
    assert_eq!(format_minutes(-15), "0h 0m");
}

#[test]
fn test_elapsed_minutes_truncates_partial_minutes() {
    let start = datetime!(2026-03-14 09:00:00 UTC);
    let end = datetime!(2026-03-14 09:44:59 UTC);

    assert_eq!(elapsed_minutes(start, end), 44);
}

#[test]
fn test_elapsed_minutes_is_never_negative() {
    let start = datetime!(2026-03-14 09:00 UTC);
    let end = datetime!(2026-03-14 08:00 UTC);

    assert_eq!(elapsed_minutes(start, end), 0);
}

#[test]
fn test_format_duration_across_midnight() {
    let start = datetime!(2026-03-14 22:15 UTC);
    let end = datetime!(2026-03-15 06:45 UTC);

    assert_eq!(format_duration(start, end), "8h 30m");
}
