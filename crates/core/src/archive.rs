// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{CoreError, Precondition};
use crate::state::Session;
use patrol_log_domain::{IdGenerator, Mission, MissionLog, MissionStatus, PatrolStop};
use time::OffsetDateTime;

/// The outcome of archiving a mission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archived {
    /// The frozen log entry.
    pub log: MissionLog,
    /// The stop that was still open when the mission ended, now closed.
    pub closed_stop: Option<PatrolStop>,
}

/// Freezes the running mission of `session` into a log entry.
///
/// An open stop is closed at `ended_at` first, so the log never holds an
/// open stop. The log is built from owned copies; the session is not touched.
///
/// # Arguments
///
/// * `session` - The session holding the running mission
/// * `ids` - Identifier source for the log entry
/// * `ended_at` - When the mission ended
///
/// # Errors
///
/// Returns an error if no mission is running.
pub fn archive_mission(
    session: &Session,
    ids: &mut IdGenerator,
    ended_at: OffsetDateTime,
) -> Result<Archived, CoreError> {
    let mission: &Mission = session
        .active_mission()
        .ok_or(CoreError::Precondition(Precondition::NoActiveMission))?;

    let mut closed_stop: Option<PatrolStop> = None;
    let mut patrol_stops: Vec<PatrolStop> = Vec::with_capacity(session.patrol_stops.len());
    for stop in &session.patrol_stops {
        if stop.is_on_site() {
            let closed: PatrolStop = stop.depart(ended_at)?;
            closed_stop = Some(closed.clone());
            patrol_stops.push(closed);
        } else {
            patrol_stops.push(stop.clone());
        }
    }

    let mut finished: Mission = mission.clone();
    finished.status = MissionStatus::Completed;
    finished.end_time = Some(ended_at);

    let log: MissionLog = MissionLog::archive(
        ids.next_id(ended_at),
        finished,
        ended_at,
        patrol_stops,
        session.incidents.clone(),
    );

    Ok(Archived { log, closed_stop })
}

/// Builds a report entry for the running mission without ending it.
///
/// # Errors
///
/// Returns an error if no mission is running.
pub fn build_report(
    session: &Session,
    ids: &mut IdGenerator,
    filed_at: OffsetDateTime,
    summary: String,
) -> Result<MissionLog, CoreError> {
    let mission: &Mission = session
        .active_mission()
        .ok_or(CoreError::Precondition(Precondition::NoActiveMission))?;

    Ok(MissionLog::report(
        ids.next_id(filed_at),
        mission,
        filed_at,
        summary,
        session.patrol_stops.clone(),
        session.incidents.clone(),
    ))
}
