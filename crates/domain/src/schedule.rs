// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of `start` arguments.
//!
//! Recognized form (case-insensitive):
//!
//! ```text
//! <h:mm> [am|pm] end <h:mm> [am|pm] <details...>
//! ```
//!
//! Both times are wall-clock times on the current calendar date in the
//! operative's timezone. An end time at or before the start time is moved
//! to the next calendar day (an overnight shift). Anything else is taken as a
//! free-text mission label starting now.

use crate::wall_clock::{from_zoned, to_zoned};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use time::OffsetDateTime;

/// Mission type used when `start` is given no label at all.
pub const DEFAULT_MISSION_TYPE: &str = "General Patrol";

/// Mission type used for a timed start without trailing details.
pub const SCHEDULED_MISSION_TYPE: &str = "Scheduled Shift";

/// The result of parsing `start` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSchedule {
    /// When the mission starts.
    pub start_time: OffsetDateTime,
    /// The scheduled end, if a time range was given.
    pub end_time: Option<OffsetDateTime>,
    /// Free-text details.
    pub details: String,
    /// The label the mission is known by.
    pub mission_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    const fn parse(token: &str) -> Option<Self> {
        match token.as_bytes() {
            [b'a' | b'A', b'm' | b'M'] => Some(Self::Am),
            [b'p' | b'P', b'm' | b'M'] => Some(Self::Pm),
            _ => None,
        }
    }
}

/// A wall-clock reading as written by the operative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockReading {
    hour: u32,
    minute: u32,
    meridiem: Option<Meridiem>,
}

impl ClockReading {
    /// Resolves the reading to a 24-hour `(hour, minute)` pair.
    ///
    /// Hours past 12 are already 24-hour values and ignore the meridiem.
    fn to_24_hour(self) -> Option<(u32, u32)> {
        let hour: u32 = match self.meridiem {
            Some(Meridiem::Pm) if self.hour < 12 => self.hour + 12,
            Some(Meridiem::Am) if self.hour == 12 => 0,
            _ => self.hour,
        };
        (hour < 24 && self.minute < 60).then_some((hour, self.minute))
    }
}

/// Parses `start` arguments into a schedule. Never fails: input that does not
/// match the timed form becomes a free-text label starting at `now`.
///
/// # Arguments
///
/// * `args` - The raw argument text following the `start` verb
/// * `now` - The current instant
/// * `tz` - The operative's timezone, used to anchor wall-clock times
#[must_use]
pub fn parse_schedule(args: &str, now: OffsetDateTime, tz: Tz) -> ParsedSchedule {
    if let Some(schedule) = parse_timed(args, now, tz) {
        return schedule;
    }

    let label: &str = args.trim();
    ParsedSchedule {
        start_time: now,
        end_time: None,
        details: label.to_string(),
        mission_type: if label.is_empty() {
            String::from(DEFAULT_MISSION_TYPE)
        } else {
            label.to_string()
        },
    }
}

fn parse_timed(args: &str, now: OffsetDateTime, tz: Tz) -> Option<ParsedSchedule> {
    let (start, rest) = read_clock(args)?;
    let (keyword, rest) = next_token(rest)?;
    if !keyword.eq_ignore_ascii_case("end") {
        return None;
    }
    let (end, rest) = read_clock(rest)?;

    let (start_hour, start_minute) = start.to_24_hour()?;
    let (end_hour, end_minute) = end.to_24_hour()?;

    let today: NaiveDate = to_zoned(now, tz).ok()?.date_naive();
    let start_naive: NaiveDateTime = today.and_hms_opt(start_hour, start_minute, 0)?;
    let mut end_naive: NaiveDateTime = today.and_hms_opt(end_hour, end_minute, 0)?;
    if end_naive <= start_naive {
        end_naive = today
            .succ_opt()?
            .and_hms_opt(end_hour, end_minute, 0)?;
    }

    let start_time: OffsetDateTime = from_zoned(&localize(tz, start_naive)?).ok()?;
    let end_time: OffsetDateTime = from_zoned(&localize(tz, end_naive)?).ok()?;

    let details: String = rest.trim().to_string();
    let mission_type: String = if details.is_empty() {
        String::from(SCHEDULED_MISSION_TYPE)
    } else {
        details.clone()
    };

    Some(ParsedSchedule {
        start_time,
        end_time: Some(end_time),
        details,
        mission_type,
    })
}

/// Places a naive wall-clock time in `tz`.
///
/// Ambiguous times (clocks falling back) take the earlier instant. Times that
/// do not exist (clocks springing forward) are pushed past the gap.
fn localize(tz: Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&naive).earliest().or_else(|| {
        tz.from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
    })
}

/// Splits off the next whitespace-delimited token.
fn next_token(input: &str) -> Option<(&str, &str)> {
    let trimmed: &str = input.trim_start();
    if trimmed.is_empty() {
        return None;
    }
    let end: usize = trimmed
        .find(char::is_whitespace)
        .unwrap_or(trimmed.len());
    Some((&trimmed[..end], &trimmed[end..]))
}

/// Reads `h:mm`, `h:mmam`, or `h:mm am` from the front of `input`.
fn read_clock(input: &str) -> Option<(ClockReading, &str)> {
    let (token, rest) = next_token(input)?;

    let suffix_start: usize = token
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(token.len());
    let (clock, suffix) = token.split_at(suffix_start);

    let (hour_text, minute_text) = clock.split_once(':')?;
    if hour_text.is_empty()
        || hour_text.len() > 2
        || minute_text.len() != 2
        || !hour_text.chars().all(|c| c.is_ascii_digit())
        || !minute_text.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }
    let hour: u32 = hour_text.parse().ok()?;
    let minute: u32 = minute_text.parse().ok()?;

    if !suffix.is_empty() {
        let meridiem: Meridiem = Meridiem::parse(suffix)?;
        return Some((
            ClockReading {
                hour,
                minute,
                meridiem: Some(meridiem),
            },
            rest,
        ));
    }

    // A separate meridiem token is optional.
    let separate: Option<(Meridiem, &str)> = next_token(rest)
        .and_then(|(next, after)| Meridiem::parse(next).map(|meridiem| (meridiem, after)));
    let (meridiem, rest) = match separate {
        Some((meridiem, after)) => (Some(meridiem), after),
        None => (None, rest),
    };

    Some((
        ClockReading {
            hour,
            minute,
            meridiem,
        },
        rest,
    ))
}
