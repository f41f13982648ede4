// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use chrono_tz::Tz;
use patrol_log_domain::{
    Bolo, EntityId, IdGenerator, Incident, Mission, MissionLog, PatrolStop, Poi, Site,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Where the operative is within the mission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No mission is running.
    Idle,
    /// A mission is running and the operative is between sites.
    Mobile,
    /// A mission is running and the operative is at a site.
    OnSite,
}

impl Phase {
    /// Converts this phase to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Mobile => "mobile",
            Self::OnSite => "on-site",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The in-progress duty session.
///
/// Every field here is part of the crash-recovery snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The running mission, if any.
    pub mission: Option<Mission>,
    /// Stops recorded during the running mission, oldest first.
    pub patrol_stops: Vec<PatrolStop>,
    /// Incidents recorded during the running mission, oldest first.
    pub incidents: Vec<Incident>,
    /// Whether the operative is currently at a site.
    pub on_site: bool,
    /// The identifier of the open stop while on site.
    pub current_stop: Option<EntityId>,
    /// Start time of the running mission.
    #[serde(with = "time::serde::rfc3339::option")]
    pub mission_start: Option<OffsetDateTime>,
}

impl Session {
    /// Creates an idle session.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// Returns the lifecycle phase of this session.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.mission.is_none() {
            Phase::Idle
        } else if self.on_site {
            Phase::OnSite
        } else {
            Phase::Mobile
        }
    }

    /// Returns whether a mission is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.mission.is_some()
    }

    /// Returns the running mission, if any.
    #[must_use]
    pub const fn active_mission(&self) -> Option<&Mission> {
        self.mission.as_ref()
    }

    /// Returns the open patrol stop, if the operative is on site.
    #[must_use]
    pub fn current_stop(&self) -> Option<&PatrolStop> {
        let id: EntityId = self.current_stop?;
        self.patrol_stops.iter().find(|stop| stop.id() == id)
    }

    /// Captures this session for crash recovery.
    ///
    /// # Arguments
    ///
    /// * `saved_at` - When the snapshot is taken
    #[must_use]
    pub fn to_snapshot(&self, saved_at: OffsetDateTime) -> SessionSnapshot {
        SessionSnapshot {
            session: self.clone(),
            saved_at,
        }
    }

    /// Rebuilds a session from a saved snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot breaks the session invariants.
    pub fn restore(snapshot: SessionSnapshot) -> Result<Self, CoreError> {
        snapshot.session.validate()?;
        Ok(snapshot.session)
    }

    /// Checks the session invariants.
    ///
    /// An idle session carries no stops, incidents or on-site marker. A running
    /// session has an active mission whose start matches `mission_start`, and
    /// the on-site flag agrees with the single open stop.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSnapshot` describing the first violation found.
    pub fn validate(&self) -> Result<(), CoreError> {
        let open_stops: Vec<&PatrolStop> = self
            .patrol_stops
            .iter()
            .filter(|stop| stop.is_on_site())
            .collect();

        let Some(mission) = &self.mission else {
            if self.on_site || self.current_stop.is_some() || !open_stops.is_empty() {
                return Err(CoreError::InvalidSnapshot(String::from(
                    "on site without an active mission",
                )));
            }
            if !self.patrol_stops.is_empty() || !self.incidents.is_empty() {
                return Err(CoreError::InvalidSnapshot(String::from(
                    "mission records without an active mission",
                )));
            }
            return Ok(());
        };

        if !mission.is_active() {
            return Err(CoreError::InvalidSnapshot(format!(
                "mission {} is {}",
                mission.id, mission.status
            )));
        }

        if self.mission_start != Some(mission.start_time) {
            return Err(CoreError::InvalidSnapshot(String::from(
                "mission start does not match the mission record",
            )));
        }

        if open_stops.len() > 1 {
            return Err(CoreError::InvalidSnapshot(format!(
                "{} stops are open at once",
                open_stops.len()
            )));
        }

        let open_id: Option<EntityId> = open_stops.first().map(|stop| stop.id());
        if self.on_site != open_id.is_some() || self.current_stop != open_id {
            return Err(CoreError::InvalidSnapshot(String::from(
                "on-site flag does not match the open stop",
            )));
        }

        Ok(())
    }
}

/// A session captured for crash recovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// The captured session.
    pub session: Session,
    /// When the snapshot was taken.
    #[serde(with = "time::serde::rfc3339")]
    pub saved_at: OffsetDateTime,
}

/// The complete state the command handlers operate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// The in-progress session.
    pub session: Session,
    /// Archived missions and reports, newest first.
    pub history: Vec<MissionLog>,
    /// Active BOLOs, oldest first.
    pub bolos: Vec<Bolo>,
    /// Patrol sites.
    pub sites: Vec<Site>,
    /// Points of interest, oldest first.
    pub pois: Vec<Poi>,
    /// Identifier source for new records.
    pub ids: IdGenerator,
}

impl State {
    /// Creates an idle state with the given sites and nothing else.
    #[must_use]
    pub fn new(sites: Vec<Site>) -> Self {
        Self::restore(Session::idle(), Vec::new(), Vec::new(), sites, Vec::new())
    }

    /// Reassembles state loaded from storage.
    ///
    /// The identifier generator is advanced past every stored identifier so
    /// new records never collide with recovered ones.
    #[must_use]
    pub fn restore(
        session: Session,
        history: Vec<MissionLog>,
        bolos: Vec<Bolo>,
        sites: Vec<Site>,
        pois: Vec<Poi>,
    ) -> Self {
        let mut ids: IdGenerator = IdGenerator::new();

        if let Some(mission) = &session.mission {
            ids.observe(mission.id);
            for check in &mission.checks {
                ids.observe(check.id);
            }
            for checkpoint in &mission.checkpoints {
                ids.observe(checkpoint.id);
            }
        }
        for stop in &session.patrol_stops {
            ids.observe(stop.id());
        }
        for incident in &session.incidents {
            ids.observe(incident.id());
        }
        history.iter().for_each(|log| ids.observe(log.id()));
        bolos.iter().for_each(|bolo| ids.observe(bolo.id()));
        sites.iter().for_each(|site| ids.observe(site.id));
        pois.iter().for_each(|poi| ids.observe(poi.id));

        Self {
            session,
            history,
            bolos,
            sites,
            pois,
            ids,
        }
    }
}

/// Ambient inputs to a command: the current instant and the operative's zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandContext {
    /// The instant the command is processed.
    pub now: OffsetDateTime,
    /// The timezone wall-clock times are read and shown in.
    pub timezone: Tz,
}

impl CommandContext {
    #[must_use]
    pub const fn new(now: OffsetDateTime, timezone: Tz) -> Self {
        Self { now, timezone }
    }
}

/// Which stores a transition touched and therefore must be written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Changes {
    /// The in-progress session changed.
    pub session: bool,
    /// Mission history gained an entry.
    pub history: bool,
    /// The BOLO list gained an entry.
    pub bolos: bool,
    /// The POI list gained an entry.
    pub pois: bool,
}

impl Changes {
    /// Nothing changed.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            session: false,
            history: false,
            bolos: false,
            pois: false,
        }
    }

    /// Returns whether any store needs writing.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.session || self.history || self.bolos || self.pois
    }

    /// Combines two sets of changes; a store is marked if either marks it.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            session: self.session || other.session,
            history: self.history || other.history,
            bolos: self.bolos || other.bolos,
            pois: self.pois || other.pois,
        }
    }
}

/// Text produced for the operative by a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    /// Output lines in display order.
    pub lines: Vec<String>,
    /// The presentation should clear its scrollback before showing `lines`.
    pub clear_screen: bool,
}

impl Reply {
    /// Creates a reply from output lines.
    #[must_use]
    pub const fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            clear_screen: false,
        }
    }

    /// Creates a single-line reply.
    #[must_use]
    pub fn line(line: impl Into<String>) -> Self {
        Self::lines(vec![line.into()])
    }

    /// Creates a reply with no output.
    #[must_use]
    pub const fn empty() -> Self {
        Self::lines(Vec::new())
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// What to show the operative.
    pub reply: Reply,
    /// Stores that must be written for the new state to be durable.
    pub changes: Changes,
}
