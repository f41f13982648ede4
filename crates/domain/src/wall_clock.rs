// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversions between stored UTC instants and wall-clock time in the
//! operative's timezone.

use crate::error::DomainError;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use time::OffsetDateTime;

/// Converts a stored instant into wall-clock time in `tz`.
///
/// # Errors
///
/// Returns an error if the instant is outside chrono's representable range.
pub fn to_zoned(instant: OffsetDateTime, tz: Tz) -> Result<DateTime<Tz>, DomainError> {
    let utc: DateTime<Utc> =
        DateTime::<Utc>::from_timestamp(instant.unix_timestamp(), instant.nanosecond())
            .ok_or_else(|| DomainError::TimestampOutOfRange {
                operation: String::from("converting to wall-clock time"),
            })?;
    Ok(utc.with_timezone(&tz))
}

/// Converts wall-clock time back into a UTC instant.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as an `OffsetDateTime`.
pub fn from_zoned(zoned: &DateTime<Tz>) -> Result<OffsetDateTime, DomainError> {
    let out_of_range = || DomainError::TimestampOutOfRange {
        operation: String::from("converting from wall-clock time"),
    };
    let nanos: i64 = zoned.timestamp_nanos_opt().ok_or_else(out_of_range)?;
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(nanos)).map_err(|_| out_of_range())
}

/// Formats an instant as `HH:MM` in `tz`.
#[must_use]
pub fn format_clock(instant: OffsetDateTime, tz: Tz) -> String {
    to_zoned(instant, tz).map_or_else(
        |_| instant.to_string(),
        |zoned| zoned.format("%H:%M").to_string(),
    )
}

/// Formats an instant as `YYYY-MM-DD HH:MM:SS ZONE` in `tz`.
#[must_use]
pub fn format_date_time(instant: OffsetDateTime, tz: Tz) -> String {
    to_zoned(instant, tz).map_or_else(
        |_| instant.to_string(),
        |zoned| zoned.format("%Y-%m-%d %H:%M:%S %Z").to_string(),
    )
}
