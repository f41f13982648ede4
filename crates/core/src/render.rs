// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Text shown to the operative.

use crate::command::CommandKind;
use crate::state::{Phase, Session};
use chrono_tz::Tz;
use patrol_log_domain::{
    Bolo, LogKind, MissionLog, PatrolStop, Poi, RADIO_CODES, RadioCode, Site, format_clock,
    format_date_time, format_duration,
};
use time::OffsetDateTime;

/// Describes the running mission with its live duration.
///
/// # Arguments
///
/// * `session` - The session to describe
/// * `now` - The instant the live duration runs to
/// * `tz` - The timezone clock times are shown in
#[must_use]
pub fn describe_status(session: &Session, now: OffsetDateTime, tz: Tz) -> Vec<String> {
    let Some(mission) = session.active_mission() else {
        return vec![String::from("No active mission. Use 'start' to begin one.")];
    };

    let mut lines: Vec<String> =
        vec![format!("Mission: {} ({})", mission.mission_type, mission.status)];
    if !mission.details.is_empty() && mission.details != mission.mission_type {
        lines.push(format!("Details: {}", mission.details));
    }
    lines.push(format!("Started: {}", format_clock(mission.start_time, tz)));
    if let Some(end) = mission.end_time {
        lines.push(format!("Scheduled end: {}", format_clock(end, tz)));
    }
    lines.push(format!(
        "Duration: {}",
        format_duration(mission.start_time, now)
    ));

    let position: String = match (session.phase(), session.current_stop()) {
        (Phase::OnSite, Some(stop)) => format!(
            "Status: on-site at {} since {}",
            stop.location(),
            format_clock(stop.arrival_time(), tz)
        ),
        (phase, _) => format!("Status: {phase}"),
    };
    lines.push(position);

    lines.push(format!(
        "Patrol stops: {} | Incidents: {} | Checks: {} | Checkpoints: {}",
        session.patrol_stops.len(),
        session.incidents.len(),
        mission.checks.len(),
        mission.checkpoints.len()
    ));

    lines
}

/// Describes one history entry in full.
#[must_use]
pub fn describe_log(log: &MissionLog, tz: Tz) -> Vec<String> {
    let mut lines: Vec<String> = vec![
        format!(
            "[{}] {} (#{})",
            log.kind(),
            log.mission_type(),
            log.mission_id()
        ),
        format!("Start: {}", format_date_time(log.start_time(), tz)),
        format!("End: {}", format_date_time(log.end_time(), tz)),
        format!("Duration: {}", log.duration()),
    ];
    if !log.details().is_empty() {
        lines.insert(1, format!("Details: {}", log.details()));
    }
    if let Some(summary) = log.summary() {
        lines.push(format!("Summary: {summary}"));
    }

    lines.push(format!("Checks ({}):", log.checks().len()));
    lines.extend(log.checks().iter().map(|check| {
        let notes: String = check
            .notes
            .as_ref()
            .map_or_else(String::new, |notes| format!(" ({notes})"));
        format!(
            "  - {} {}: {}{notes}",
            format_clock(check.timestamp, tz),
            check.name,
            check.status
        )
    }));

    lines.push(format!("Checkpoints ({}):", log.checkpoints().len()));
    lines.extend(log.checkpoints().iter().map(|checkpoint| {
        format!(
            "  - {} {}: {}",
            format_clock(checkpoint.timestamp, tz),
            checkpoint.name,
            checkpoint.status
        )
    }));

    lines.push(format!("Patrol stops ({}):", log.patrol_stops().len()));
    lines.extend(log.patrol_stops().iter().map(|stop| stop_line(stop, tz)));

    lines.push(format!("Incidents ({}):", log.incidents().len()));
    lines.extend(log.incidents().iter().map(|incident| {
        format!(
            "  - {} {} at {}: {}",
            format_clock(incident.timestamp(), tz),
            incident.incident_type(),
            incident.location(),
            incident.description()
        )
    }));

    lines
}

pub(crate) fn history_lines(history: &[MissionLog], tz: Tz) -> Vec<String> {
    if history.is_empty() {
        return vec![String::from("No mission logs yet.")];
    }

    let mut lines: Vec<String> = vec![format!("Mission logs ({}):", history.len())];
    lines.extend(history.iter().enumerate().map(|(index, log)| {
        let label: &str = match log.kind() {
            LogKind::Mission => "",
            LogKind::Report => " [report]",
        };
        format!(
            "{}. {} {}{label} - {}",
            index + 1,
            format_date_time(log.start_time(), tz),
            log.mission_type(),
            log.duration()
        )
    }));
    lines.push(String::from("Use 'logs <n>' to view an entry."));
    lines
}

pub(crate) fn patrol_lines(stops: &[PatrolStop], tz: Tz) -> Vec<String> {
    if stops.is_empty() {
        return vec![String::from("No patrol stops recorded.")];
    }
    let mut lines: Vec<String> = vec![format!("Patrol stops ({}):", stops.len())];
    lines.extend(stops.iter().map(|stop| stop_line(stop, tz)));
    lines
}

pub(crate) fn site_lines(sites: &[Site]) -> Vec<String> {
    if sites.is_empty() {
        return vec![String::from("No sites configured.")];
    }
    let mut lines: Vec<String> = vec![format!("Sites ({}):", sites.len())];
    lines.extend(
        sites
            .iter()
            .map(|site| format!("  - {}: {}", site.name, site.description)),
    );
    lines
}

pub(crate) fn bolo_lines(bolos: &[Bolo], tz: Tz) -> Vec<String> {
    if bolos.is_empty() {
        return vec![String::from("No active BOLOs.")];
    }
    let mut lines: Vec<String> = vec![format!("Active BOLOs ({}):", bolos.len())];
    lines.extend(bolos.iter().map(|bolo| {
        format!(
            "  - {} {}: {}",
            format_date_time(bolo.timestamp(), tz),
            bolo.subject(),
            bolo.description()
        )
    }));
    lines
}

pub(crate) fn poi_lines(pois: &[Poi]) -> Vec<String> {
    if pois.is_empty() {
        return vec![String::from("No points of interest recorded.")];
    }
    let mut lines: Vec<String> = vec![format!("Points of interest ({}):", pois.len())];
    lines.extend(
        pois.iter()
            .map(|poi| format!("  - {}: {}", poi.name, poi.notes)),
    );
    lines
}

pub(crate) fn code_lines(codes: &[RadioCode]) -> Vec<String> {
    codes
        .iter()
        .map(|entry| format!("{}: {}", entry.code, entry.meaning))
        .collect()
}

pub(crate) fn all_code_lines() -> Vec<String> {
    let mut lines: Vec<String> = vec![String::from("Radio codes:")];
    lines.extend(
        code_lines(RADIO_CODES)
            .into_iter()
            .map(|line| format!("  {line}")),
    );
    lines
}

pub(crate) fn help_lines() -> Vec<String> {
    let mut lines: Vec<String> = vec![String::from("Commands:")];
    lines.extend(
        CommandKind::ALL
            .iter()
            .map(|kind| format!("  {:<48} {}", kind.usage(), kind.summary())),
    );
    lines
}

fn stop_line(stop: &PatrolStop, tz: Tz) -> String {
    match (stop.departure_time(), stop.duration()) {
        (Some(departed), Some(duration)) => format!(
            "  - {}: {} - {} ({duration})",
            stop.location(),
            format_clock(stop.arrival_time(), tz),
            format_clock(departed, tz)
        ),
        _ => format!(
            "  - {}: {} - on site",
            stop.location(),
            format_clock(stop.arrival_time(), tz)
        ),
    }
}
