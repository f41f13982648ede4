// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod duration;
mod error;
mod ids;
mod radio_codes;
mod schedule;
mod sites;
mod types;
mod validation;
mod wall_clock;

#[cfg(test)]
mod tests;

// Re-export public types
pub use duration::{elapsed_minutes, format_duration, format_minutes};
pub use error::DomainError;
pub use ids::IdGenerator;
pub use radio_codes::{RADIO_CODES, RadioCode, lookup_radio_code};
pub use schedule::{DEFAULT_MISSION_TYPE, ParsedSchedule, SCHEDULED_MISSION_TYPE, parse_schedule};
pub use sites::default_sites;
pub use types::{
    Bolo, BoloStatus, CheckEntry, CheckpointEntry, EntityId, Incident, IncidentStatus, LogKind,
    Mission, MissionLog, MissionStatus, PatrolStop, Poi, Site, StopStatus,
};
pub use validation::{require_text, validate_timezone};
pub use wall_clock::{format_clock, format_date_time, from_zoned, to_zoned};
