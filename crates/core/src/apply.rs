// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::archive::{Archived, archive_mission, build_report};
use crate::command::{Command, DEFAULT_REPORT_SUMMARY};
use crate::error::{CoreError, Precondition};
use crate::render::{
    all_code_lines, bolo_lines, code_lines, describe_log, describe_status, help_lines,
    history_lines, patrol_lines, poi_lines, site_lines,
};
use crate::state::{Changes, CommandContext, Reply, Session, State, TransitionResult};
use patrol_log_domain::{
    Bolo, CheckEntry, CheckpointEntry, EntityId, Incident, Mission, MissionLog, ParsedSchedule,
    PatrolStop, Poi, RadioCode, format_clock, format_date_time, lookup_radio_code,
    parse_schedule, require_text,
};

/// Applies a command to the current state, producing a new state and reply.
///
/// This function is pure: it does not perform I/O or mutate the input state.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `ctx` - The current instant and timezone
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state, the reply and the stores to save
/// * `Err(CoreError)` if the command is rejected
///
/// # Errors
///
/// Returns an error if:
/// - The command is not allowed in the current lifecycle phase
/// - A required text field is empty
/// - `logs <n>` names an entry that does not exist
pub fn apply(
    state: &State,
    command: Command,
    ctx: &CommandContext,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::Start { arguments } => start(state, &arguments, ctx),
        Command::End => end(state, ctx),
        Command::OnSite { location } => on_site(state, &location, ctx),
        Command::OffSite => off_site(state, ctx),
        Command::Incident {
            incident_type,
            location,
            description,
        } => incident(state, &incident_type, &location, &description, ctx),
        Command::Check {
            name,
            status,
            notes,
        } => check(state, &name, &status, notes.as_deref(), ctx),
        Command::Checkpoint { name, status } => checkpoint(state, &name, &status, ctx),
        Command::Report { summary } => report(state, &summary, ctx),
        Command::Bolo {
            subject,
            description,
        } => bolo(state, &subject, &description, ctx),
        Command::Poi { name, notes } => poi(state, &name, &notes, ctx),
        Command::Status => Ok(read_only(
            state,
            describe_status(&state.session, ctx.now, ctx.timezone),
        )),
        Command::Patrol => {
            require_mission(&state.session)?;
            Ok(read_only(
                state,
                patrol_lines(&state.session.patrol_stops, ctx.timezone),
            ))
        }
        Command::Sites => Ok(read_only(state, site_lines(&state.sites))),
        Command::Bolos => Ok(read_only(state, bolo_lines(&state.bolos, ctx.timezone))),
        Command::Pois => Ok(read_only(state, poi_lines(&state.pois))),
        Command::Logs { entry } => logs(state, entry, ctx),
        Command::Time => Ok(read_only(
            state,
            vec![format!(
                "Current time: {}",
                format_date_time(ctx.now, ctx.timezone)
            )],
        )),
        Command::Code { code } => Ok(read_only(state, code_reply(code.as_deref()))),
        Command::Clear => Ok(TransitionResult {
            new_state: state.clone(),
            reply: Reply {
                lines: Vec::new(),
                clear_screen: true,
            },
            changes: Changes::none(),
        }),
        Command::Help => Ok(read_only(state, help_lines())),
    }
}

fn start(
    state: &State,
    arguments: &str,
    ctx: &CommandContext,
) -> Result<TransitionResult, CoreError> {
    // Only one mission may run at a time
    if let Some(mission) = state.session.active_mission() {
        return Err(Precondition::MissionAlreadyActive {
            mission_type: mission.mission_type.clone(),
        }
        .into());
    }

    let schedule: ParsedSchedule = parse_schedule(arguments, ctx.now, ctx.timezone);

    let mut new_state: State = state.clone();
    let id: EntityId = new_state.ids.next_id(ctx.now);
    let mission: Mission = Mission::start(id, schedule);

    let mut lines: Vec<String> = vec![
        format!("Mission started: {}", mission.mission_type),
        format!("Start: {}", format_clock(mission.start_time, ctx.timezone)),
    ];
    if let Some(end) = mission.end_time {
        lines.push(format!(
            "Scheduled end: {}",
            format_clock(end, ctx.timezone)
        ));
    }

    // Stops and incidents belong to one mission, so a new mission starts empty
    new_state.session = Session {
        mission_start: Some(mission.start_time),
        mission: Some(mission),
        patrol_stops: Vec::new(),
        incidents: Vec::new(),
        on_site: false,
        current_stop: None,
    };

    Ok(session_changed(new_state, lines))
}

fn end(state: &State, ctx: &CommandContext) -> Result<TransitionResult, CoreError> {
    let mut new_state: State = state.clone();
    let archived: Archived = archive_mission(&state.session, &mut new_state.ids, ctx.now)?;

    let mut lines: Vec<String> = Vec::new();
    if let Some(stop) = &archived.closed_stop {
        lines.push(format!(
            "Departed {} after {}",
            stop.location(),
            stop.duration().unwrap_or_default()
        ));
    }
    lines.push(format!("Mission ended: {}", archived.log.mission_type()));
    lines.push(format!("Duration: {}", archived.log.duration()));

    new_state.history.insert(0, archived.log);
    new_state.session = Session::idle();
    lines.push(format!(
        "Mission archived ({} entries in logs)",
        new_state.history.len()
    ));

    Ok(TransitionResult {
        new_state,
        reply: Reply::lines(lines),
        changes: Changes {
            session: true,
            history: true,
            ..Changes::none()
        },
    })
}

fn on_site(
    state: &State,
    location: &str,
    ctx: &CommandContext,
) -> Result<TransitionResult, CoreError> {
    require_mission(&state.session)?;
    if let Some(stop) = state.session.current_stop() {
        return Err(Precondition::AlreadyOnSite {
            location: stop.location().to_string(),
        }
        .into());
    }
    if state.session.on_site {
        return Err(Precondition::AlreadyOnSite {
            location: String::from("an unknown location"),
        }
        .into());
    }

    let location: String = require_text("location", location)?;

    let mut new_state: State = state.clone();
    let id: EntityId = new_state.ids.next_id(ctx.now);
    let stop: PatrolStop = PatrolStop::arrive(id, location, ctx.now);
    let line: String = format!(
        "On site at {} ({})",
        stop.location(),
        format_clock(ctx.now, ctx.timezone)
    );

    new_state.session.patrol_stops.push(stop);
    new_state.session.on_site = true;
    new_state.session.current_stop = Some(id);

    Ok(session_changed(new_state, vec![line]))
}

fn off_site(state: &State, ctx: &CommandContext) -> Result<TransitionResult, CoreError> {
    require_mission(&state.session)?;
    if !state.session.on_site {
        return Err(Precondition::NotOnSite.into());
    }

    let mut new_state: State = state.clone();
    let position: usize = state
        .session
        .current_stop
        .and_then(|id| {
            state
                .session
                .patrol_stops
                .iter()
                .position(|stop| stop.id() == id)
        })
        .ok_or(CoreError::Precondition(Precondition::NotOnSite))?;

    let closed: PatrolStop = state.session.patrol_stops[position].depart(ctx.now)?;
    let line: String = format!(
        "Departed {} after {}",
        closed.location(),
        closed.duration().unwrap_or_default()
    );

    new_state.session.patrol_stops[position] = closed;
    new_state.session.on_site = false;
    new_state.session.current_stop = None;

    Ok(session_changed(new_state, vec![line]))
}

fn incident(
    state: &State,
    incident_type: &str,
    location: &str,
    description: &str,
    ctx: &CommandContext,
) -> Result<TransitionResult, CoreError> {
    require_mission(&state.session)?;
    let incident_type: String = require_text("incident type", incident_type)?;
    let location: String = require_text("location", location)?;
    let description: String = require_text("description", description)?;

    let mut new_state: State = state.clone();
    let id: EntityId = new_state.ids.next_id(ctx.now);
    let line: String = format!("Incident logged: {incident_type} at {location} (#{id})");
    new_state.session.incidents.push(Incident::new(
        id,
        incident_type,
        location,
        description,
        ctx.now,
    ));

    Ok(session_changed(new_state, vec![line]))
}

fn check(
    state: &State,
    name: &str,
    status: &str,
    notes: Option<&str>,
    ctx: &CommandContext,
) -> Result<TransitionResult, CoreError> {
    require_mission(&state.session)?;
    let name: String = require_text("check name", name)?;
    let status: String = require_text("check status", status)?;
    let notes: Option<String> = notes
        .map(str::trim)
        .filter(|notes| !notes.is_empty())
        .map(str::to_string);

    let mut new_state: State = state.clone();
    let id: EntityId = new_state.ids.next_id(ctx.now);
    let line: String = format!("Check recorded: {name} - {status}");
    mission_mut(&mut new_state.session)?.checks.push(CheckEntry {
        id,
        name,
        status,
        notes,
        timestamp: ctx.now,
    });

    Ok(session_changed(new_state, vec![line]))
}

fn checkpoint(
    state: &State,
    name: &str,
    status: &str,
    ctx: &CommandContext,
) -> Result<TransitionResult, CoreError> {
    require_mission(&state.session)?;
    let name: String = require_text("checkpoint name", name)?;
    let status: String = require_text("checkpoint status", status)?;

    let mut new_state: State = state.clone();
    let id: EntityId = new_state.ids.next_id(ctx.now);
    let line: String = format!("Checkpoint recorded: {name} - {status}");
    mission_mut(&mut new_state.session)?
        .checkpoints
        .push(CheckpointEntry {
            id,
            name,
            status,
            timestamp: ctx.now,
        });

    Ok(session_changed(new_state, vec![line]))
}

fn report(
    state: &State,
    summary: &str,
    ctx: &CommandContext,
) -> Result<TransitionResult, CoreError> {
    require_mission(&state.session)?;
    let summary: String = require_text("summary", summary)
        .unwrap_or_else(|_| String::from(DEFAULT_REPORT_SUMMARY));

    let mut new_state: State = state.clone();
    let log: MissionLog = build_report(&state.session, &mut new_state.ids, ctx.now, summary)?;
    let line: String = format!(
        "Report filed for {} ({} elapsed)",
        log.mission_type(),
        log.duration()
    );
    new_state.history.insert(0, log);

    Ok(TransitionResult {
        new_state,
        reply: Reply::line(line),
        changes: Changes {
            history: true,
            ..Changes::none()
        },
    })
}

fn bolo(
    state: &State,
    subject: &str,
    description: &str,
    ctx: &CommandContext,
) -> Result<TransitionResult, CoreError> {
    let subject: String = require_text("subject", subject)?;
    let description: String = require_text("description", description)?;

    let mut new_state: State = state.clone();
    let id: EntityId = new_state.ids.next_id(ctx.now);
    let line: String = format!("BOLO issued: {subject}");
    new_state
        .bolos
        .push(Bolo::new(id, subject, description, ctx.now));

    Ok(TransitionResult {
        new_state,
        reply: Reply::line(line),
        changes: Changes {
            bolos: true,
            ..Changes::none()
        },
    })
}

fn poi(
    state: &State,
    name: &str,
    notes: &str,
    ctx: &CommandContext,
) -> Result<TransitionResult, CoreError> {
    let name: String = require_text("name", name)?;
    let notes: String = require_text("notes", notes)?;

    let mut new_state: State = state.clone();
    let id: EntityId = new_state.ids.next_id(ctx.now);
    let line: String = format!("Point of interest saved: {name}");
    new_state.pois.push(Poi {
        id,
        name,
        notes,
        timestamp: ctx.now,
    });

    Ok(TransitionResult {
        new_state,
        reply: Reply::line(line),
        changes: Changes {
            pois: true,
            ..Changes::none()
        },
    })
}

fn logs(
    state: &State,
    entry: Option<usize>,
    ctx: &CommandContext,
) -> Result<TransitionResult, CoreError> {
    let Some(entry) = entry else {
        return Ok(read_only(
            state,
            history_lines(&state.history, ctx.timezone),
        ));
    };

    let log: &MissionLog = entry
        .checked_sub(1)
        .and_then(|index| state.history.get(index))
        .ok_or(CoreError::LogNotFound {
            entry,
            available: state.history.len(),
        })?;

    Ok(read_only(state, describe_log(log, ctx.timezone)))
}

fn code_reply(code: Option<&str>) -> Vec<String> {
    let Some(code) = code else {
        return all_code_lines();
    };
    lookup_radio_code(code).map_or_else(
        || vec![format!("Unknown code: {code}")],
        |entry: &RadioCode| code_lines(std::slice::from_ref(entry)),
    )
}

fn require_mission(session: &Session) -> Result<&Mission, CoreError> {
    session
        .active_mission()
        .ok_or(CoreError::Precondition(Precondition::NoActiveMission))
}

fn mission_mut(session: &mut Session) -> Result<&mut Mission, CoreError> {
    session
        .mission
        .as_mut()
        .ok_or(CoreError::Precondition(Precondition::NoActiveMission))
}

fn session_changed(new_state: State, lines: Vec<String>) -> TransitionResult {
    TransitionResult {
        new_state,
        reply: Reply::lines(lines),
        changes: Changes {
            session: true,
            ..Changes::none()
        },
    }
}

fn read_only(state: &State, lines: Vec<String>) -> TransitionResult {
    TransitionResult {
        new_state: state.clone(),
        reply: Reply::lines(lines),
        changes: Changes::none(),
    }
}
