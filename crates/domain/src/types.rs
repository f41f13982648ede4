// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::duration::format_duration;
use crate::error::DomainError;
use crate::schedule::ParsedSchedule;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An opaque identifier derived from a monotonic clock reading.
///
/// See [`crate::IdGenerator`] for how values are issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionStatus {
    /// The mission is running.
    Active,
    /// The mission has ended and been archived.
    Completed,
}

impl MissionStatus {
    /// Converts this status to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a patrol stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopStatus {
    /// The operative is currently at this location.
    OnSite,
    /// The operative has departed.
    Completed,
}

impl StopStatus {
    /// Converts this status to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OnSite => "on-site",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for StopStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of an incident. Incidents are only ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    #[default]
    Reported,
}

/// Status of a BOLO. BOLOs are only ever active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BoloStatus {
    #[default]
    Active,
}

/// A named check recorded during a mission (door, alarm panel, gate, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckEntry {
    pub id: EntityId,
    pub name: String,
    pub status: String,
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// A checkpoint scan recorded during a mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointEntry {
    pub id: EntityId,
    pub name: String,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// A single duty session.
///
/// The mission is the only record that changes while it is active. Once it
/// ends it is frozen into a [`MissionLog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_field_names)]
pub struct Mission {
    pub id: EntityId,
    pub mission_type: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    /// Set when the mission was started with a scheduled end, or when it ends.
    #[serde(with = "time::serde::rfc3339::option")]
    pub end_time: Option<OffsetDateTime>,
    pub status: MissionStatus,
    pub details: String,
    pub checks: Vec<CheckEntry>,
    pub checkpoints: Vec<CheckpointEntry>,
}

impl Mission {
    /// Creates a new active mission from a parsed schedule.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier for the mission
    /// * `schedule` - The parsed start arguments
    #[must_use]
    pub fn start(id: EntityId, schedule: ParsedSchedule) -> Self {
        Self {
            id,
            mission_type: schedule.mission_type,
            start_time: schedule.start_time,
            end_time: schedule.end_time,
            status: MissionStatus::Active,
            details: schedule.details,
            checks: Vec::new(),
            checkpoints: Vec::new(),
        }
    }

    /// Returns whether the mission is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == MissionStatus::Active
    }
}

/// One arrival-to-departure interval at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatrolStop {
    id: EntityId,
    location: String,
    #[serde(with = "time::serde::rfc3339")]
    arrival_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    departure_time: Option<OffsetDateTime>,
    duration: Option<String>,
    status: StopStatus,
}

impl PatrolStop {
    /// Creates a stop for an arrival happening now.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier for the stop
    /// * `location` - Where the operative arrived
    /// * `arrival_time` - When the operative arrived
    #[must_use]
    pub const fn arrive(id: EntityId, location: String, arrival_time: OffsetDateTime) -> Self {
        Self {
            id,
            location,
            arrival_time,
            departure_time: None,
            duration: None,
            status: StopStatus::OnSite,
        }
    }

    /// Returns a closed copy of this stop with departure time and duration set.
    ///
    /// The duration is computed here and nowhere else.
    ///
    /// # Errors
    ///
    /// Returns an error if the stop has already been closed.
    pub fn depart(&self, departure_time: OffsetDateTime) -> Result<Self, DomainError> {
        if self.status == StopStatus::Completed {
            return Err(DomainError::StopAlreadyClosed {
                location: self.location.clone(),
            });
        }

        Ok(Self {
            id: self.id,
            location: self.location.clone(),
            arrival_time: self.arrival_time,
            departure_time: Some(departure_time),
            duration: Some(format_duration(self.arrival_time, departure_time)),
            status: StopStatus::Completed,
        })
    }

    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub const fn arrival_time(&self) -> OffsetDateTime {
        self.arrival_time
    }

    #[must_use]
    pub const fn departure_time(&self) -> Option<OffsetDateTime> {
        self.departure_time
    }

    #[must_use]
    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    #[must_use]
    pub const fn status(&self) -> StopStatus {
        self.status
    }

    /// Returns whether the operative is still at this stop.
    #[must_use]
    pub const fn is_on_site(&self) -> bool {
        matches!(self.status, StopStatus::OnSite)
    }
}

/// A reported incident. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    id: EntityId,
    #[serde(rename = "incident_type")]
    kind: String,
    location: String,
    description: String,
    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,
    status: IncidentStatus,
}

impl Incident {
    /// Creates a new reported incident.
    #[must_use]
    pub const fn new(
        id: EntityId,
        incident_type: String,
        location: String,
        description: String,
        timestamp: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            kind: incident_type,
            location,
            description,
            timestamp,
            status: IncidentStatus::Reported,
        }
    }

    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    #[must_use]
    pub fn incident_type(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    #[must_use]
    pub const fn status(&self) -> IncidentStatus {
        self.status
    }
}

/// A "be on the lookout" watch alert. Lives independently of missions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bolo {
    id: EntityId,
    subject: String,
    description: String,
    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,
    status: BoloStatus,
}

impl Bolo {
    /// Creates a new active BOLO.
    #[must_use]
    pub const fn new(
        id: EntityId,
        subject: String,
        description: String,
        timestamp: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            subject,
            description,
            timestamp,
            status: BoloStatus::Active,
        }
    }

    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    #[must_use]
    pub const fn status(&self) -> BoloStatus {
        self.status
    }
}

/// A patrol site. Static reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: EntityId,
    pub name: String,
    pub description: String,
}

/// A point-of-interest note kept by the operative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poi {
    pub id: EntityId,
    pub name: String,
    pub notes: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// What produced a [`MissionLog`] entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    /// A mission that ended.
    Mission,
    /// A report filed while a mission was still running.
    Report,
}

impl LogKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mission => "mission",
            Self::Report => "report",
        }
    }
}

impl std::fmt::Display for LogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The archived, immutable record of a mission or report.
///
/// There are no setters. A log can only be built from owned copies of the
/// session collections, so nothing held by the live session can reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionLog {
    id: EntityId,
    kind: LogKind,
    mission_id: EntityId,
    mission_type: String,
    details: String,
    #[serde(with = "time::serde::rfc3339")]
    start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    end_time: OffsetDateTime,
    duration: String,
    checks: Vec<CheckEntry>,
    checkpoints: Vec<CheckpointEntry>,
    patrol_stops: Vec<PatrolStop>,
    incidents: Vec<Incident>,
    summary: Option<String>,
}

impl MissionLog {
    /// Freezes a finished mission.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier for the log entry
    /// * `mission` - The mission being archived, with its end time set
    /// * `end_time` - When the mission ended
    /// * `patrol_stops` - The stops recorded during the mission
    /// * `incidents` - The incidents recorded during the mission
    #[must_use]
    pub fn archive(
        id: EntityId,
        mission: Mission,
        end_time: OffsetDateTime,
        patrol_stops: Vec<PatrolStop>,
        incidents: Vec<Incident>,
    ) -> Self {
        Self {
            id,
            kind: LogKind::Mission,
            mission_id: mission.id,
            duration: format_duration(mission.start_time, end_time),
            mission_type: mission.mission_type,
            details: mission.details,
            start_time: mission.start_time,
            end_time,
            checks: mission.checks,
            checkpoints: mission.checkpoints,
            patrol_stops,
            incidents,
            summary: None,
        }
    }

    /// Builds a standalone report for a mission that keeps running.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier for the log entry
    /// * `mission` - The running mission the report refers to
    /// * `filed_at` - When the report was filed
    /// * `summary` - The report text
    /// * `patrol_stops` - Copies of the stops recorded so far
    /// * `incidents` - Copies of the incidents recorded so far
    #[must_use]
    pub fn report(
        id: EntityId,
        mission: &Mission,
        filed_at: OffsetDateTime,
        summary: String,
        patrol_stops: Vec<PatrolStop>,
        incidents: Vec<Incident>,
    ) -> Self {
        Self {
            id,
            kind: LogKind::Report,
            mission_id: mission.id,
            mission_type: mission.mission_type.clone(),
            details: mission.details.clone(),
            start_time: mission.start_time,
            end_time: filed_at,
            duration: format_duration(mission.start_time, filed_at),
            checks: mission.checks.clone(),
            checkpoints: mission.checkpoints.clone(),
            patrol_stops,
            incidents,
            summary: Some(summary),
        }
    }

    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    #[must_use]
    pub const fn kind(&self) -> LogKind {
        self.kind
    }

    #[must_use]
    pub const fn mission_id(&self) -> EntityId {
        self.mission_id
    }

    #[must_use]
    pub fn mission_type(&self) -> &str {
        &self.mission_type
    }

    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    #[must_use]
    pub const fn start_time(&self) -> OffsetDateTime {
        self.start_time
    }

    #[must_use]
    pub const fn end_time(&self) -> OffsetDateTime {
        self.end_time
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn checks(&self) -> &[CheckEntry] {
        &self.checks
    }

    #[must_use]
    pub fn checkpoints(&self) -> &[CheckpointEntry] {
        &self.checkpoints
    }

    #[must_use]
    pub fn patrol_stops(&self) -> &[PatrolStop] {
        &self.patrol_stops
    }

    #[must_use]
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}
