// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_state, ctx_at, run, run_all, run_err, test_now};
use crate::{
    Changes, Command, CommandContext, CommandKind, CoreError, Precondition, State,
    TransitionResult, apply,
};
use patrol_log_domain::{CheckEntry, DomainError};
use time::macros::datetime;

// ============================================================================
// Mission-scoped records
// ============================================================================

#[test]
fn test_incident_requires_active_mission() {
    let err: CoreError = run_err(&create_test_state(), "incident Theft Lobby bag", test_now());

    assert_eq!(err, CoreError::Precondition(Precondition::NoActiveMission));
}

#[test]
fn test_incident_with_too_few_arguments_is_usage_error() {
    let state: State = run_all(&create_test_state(), &["start Patrol A"]);

    let err: CoreError = run_err(&state, "incident Theft Lobby", test_now());

    assert_eq!(
        err,
        CoreError::Usage {
            command: CommandKind::Incident
        }
    );
    assert!(err.to_string().starts_with("Usage: incident"));
}

#[test]
fn test_usage_error_wins_over_missing_mission() {
    let err: CoreError = run_err(&create_test_state(), "incident Theft", test_now());

    assert!(matches!(err, CoreError::Usage { .. }));
}

#[test]
fn test_incident_with_blank_quoted_field_is_rejected() {
    let state: State = run_all(&create_test_state(), &["start Patrol A"]);

    let err: CoreError = run_err(&state, "incident \"  \" Lobby bag stolen", test_now());

    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::EmptyField {
            field: "incident type"
        })
    );
    assert!(state.session.incidents.is_empty());
}

#[test]
fn test_check_records_optional_notes() {
    let state: State = run_all(
        &create_test_state(),
        &[
            "start Patrol A",
            "check \"Rear door\" secure",
            "check Alarm armed panel shows green",
        ],
    );

    let checks: &[CheckEntry] = &state.session.active_mission().unwrap().checks;
    assert_eq!(checks.len(), 2);
    assert_eq!(checks[0].name, "Rear door");
    assert_eq!(checks[0].notes, None);
    assert_eq!(checks[1].status, "armed");
    assert_eq!(checks[1].notes.as_deref(), Some("panel shows green"));
}

#[test]
fn test_checkpoint_requires_name_and_status() {
    let state: State = run_all(&create_test_state(), &["start Patrol A"]);

    let err: CoreError = run_err(&state, "checkpoint CP-1", test_now());

    assert_eq!(
        err,
        CoreError::Usage {
            command: CommandKind::Checkpoint
        }
    );
}

#[test]
fn test_checkpoint_without_mission_is_rejected() {
    let err: CoreError = run_err(&create_test_state(), "checkpoint CP-1 ok", test_now());

    assert_eq!(err, CoreError::Precondition(Precondition::NoActiveMission));
}

#[test]
fn test_records_get_distinct_ids() {
    let state: State = run_all(
        &create_test_state(),
        &["start Patrol A", "onsite Lobby", "incident Theft Lobby bag"],
    );

    let mission_id = state.session.active_mission().unwrap().id;
    let stop_id = state.session.patrol_stops[0].id();
    let incident_id = state.session.incidents[0].id();
    assert!(mission_id < stop_id);
    assert!(stop_id < incident_id);
}

// ============================================================================
// Process-wide records
// ============================================================================

#[test]
fn test_bolo_is_allowed_without_mission() {
    let result: TransitionResult = run(
        &create_test_state(),
        "bolo \"Red sedan\" plate ABC-123 seen near gate",
        test_now(),
    );

    assert_eq!(result.new_state.bolos.len(), 1);
    assert_eq!(result.new_state.bolos[0].subject(), "Red sedan");
    assert_eq!(
        result.new_state.bolos[0].description(),
        "plate ABC-123 seen near gate"
    );
    assert_eq!(
        result.changes,
        Changes {
            bolos: true,
            ..Changes::none()
        }
    );
}

#[test]
fn test_changes_merge_keeps_every_marked_store() {
    let session: Changes = Changes {
        session: true,
        ..Changes::none()
    };
    let bolos: Changes = Changes {
        bolos: true,
        ..Changes::none()
    };

    let merged: Changes = session.merge(bolos);

    assert!(merged.session);
    assert!(merged.bolos);
    assert!(!merged.history);
    assert!(!merged.pois);
    assert_eq!(Changes::none().merge(Changes::none()), Changes::none());
}

#[test]
fn test_bolo_needs_description() {
    let err: CoreError = run_err(&create_test_state(), "bolo Sedan", test_now());

    assert_eq!(
        err,
        CoreError::Usage {
            command: CommandKind::Bolo
        }
    );
}

#[test]
fn test_poi_is_recorded_and_listed() {
    let state: State = run_all(
        &create_test_state(),
        &["poi \"Side gate\" code 4411 after dark"],
    );
    assert_eq!(state.pois.len(), 1);
    assert_eq!(state.pois[0].notes, "code 4411 after dark");

    let listed: TransitionResult = run(&state, "pois", test_now());
    assert!(
        listed
            .reply
            .lines
            .iter()
            .any(|line| line.contains("Side gate"))
    );
}

// ============================================================================
// Read-only commands
// ============================================================================

#[test]
fn test_read_only_commands_change_nothing() {
    let state: State = run_all(&create_test_state(), &["start Patrol A", "onsite Lobby"]);

    for line in [
        "status", "patrol", "sites", "bolos", "pois", "logs", "time", "code", "code 10-4",
        "help",
    ] {
        let result: TransitionResult = run(&state, line, test_now());
        assert_eq!(result.new_state, state, "{line} changed state");
        assert!(!result.changes.any(), "{line} reported changes");
    }
}

#[test]
fn test_status_when_idle() {
    let result: TransitionResult = run(&create_test_state(), "status", test_now());

    assert_eq!(
        result.reply.lines,
        vec![String::from("No active mission. Use 'start' to begin one.")]
    );
}

#[test]
fn test_status_shows_live_duration_and_location() {
    let state: State = run_all(&create_test_state(), &["start Patrol A", "onsite Lobby"]);

    let result: TransitionResult = run(&state, "status", datetime!(2026-03-14 11:45 UTC));

    assert!(
        result
            .reply
            .lines
            .contains(&String::from("Duration: 2h 15m"))
    );
    assert!(
        result
            .reply
            .lines
            .iter()
            .any(|line| line.starts_with("Status: on-site at Lobby"))
    );
}

#[test]
fn test_patrol_requires_active_mission() {
    let err: CoreError = run_err(&create_test_state(), "patrol", test_now());

    assert_eq!(err, CoreError::Precondition(Precondition::NoActiveMission));
}

#[test]
fn test_sites_lists_seeded_sites() {
    let result: TransitionResult = run(&create_test_state(), "sites", test_now());

    assert_eq!(result.reply.lines.len(), 6);
}

#[test]
fn test_logs_entry_shows_detail() {
    let state: State = run_all(
        &create_test_state(),
        &["start Patrol A", "incident Theft Lobby bag stolen", "end"],
    );

    let result: TransitionResult = run(&state, "logs 1", test_now());

    assert!(result.reply.lines[0].contains("Patrol A"));
    assert!(
        result
            .reply
            .lines
            .iter()
            .any(|line| line.contains("Theft at Lobby: bag stolen"))
    );
}

#[test]
fn test_logs_entry_out_of_range() {
    let state: State = run_all(&create_test_state(), &["start Patrol A", "end"]);

    let err: CoreError = run_err(&state, "logs 3", test_now());

    assert_eq!(
        err,
        CoreError::LogNotFound {
            entry: 3,
            available: 1
        }
    );
}

#[test]
fn test_logs_rejects_non_numeric_entry() {
    let err: CoreError = run_err(&create_test_state(), "logs latest", test_now());

    assert_eq!(
        err,
        CoreError::Usage {
            command: CommandKind::Logs
        }
    );
}

#[test]
fn test_time_uses_configured_timezone() {
    let ctx: CommandContext = CommandContext::new(test_now(), chrono_tz::America::New_York);

    let result: TransitionResult = apply(&create_test_state(), Command::Time, &ctx).unwrap();

    assert_eq!(
        result.reply.lines,
        vec![String::from("Current time: 2026-03-14 05:30:00 EDT")]
    );
}

#[test]
fn test_code_lookup() {
    let known: TransitionResult = run(&create_test_state(), "code 4", test_now());
    let unknown: TransitionResult = run(&create_test_state(), "code 10-999", test_now());

    assert!(known.reply.lines[0].starts_with("10-4: "));
    assert_eq!(
        unknown.reply.lines,
        vec![String::from("Unknown code: 10-999")]
    );
}

#[test]
fn test_clear_sets_clear_screen() {
    let result: TransitionResult = run(&create_test_state(), "clear", test_now());

    assert!(result.reply.clear_screen);
    assert!(result.reply.lines.is_empty());
}

#[test]
fn test_help_lists_every_command() {
    let result: TransitionResult = run(&create_test_state(), "help", test_now());

    assert_eq!(result.reply.lines.len(), CommandKind::ALL.len() + 1);
}

#[test]
fn test_start_reports_scheduled_end() {
    let result: TransitionResult = apply(
        &create_test_state(),
        Command::Start {
            arguments: String::from("6:00am end 2:00pm Patrol B"),
        },
        &ctx_at(test_now()),
    )
    .unwrap();

    assert_eq!(
        result.reply.lines,
        vec![
            String::from("Mission started: Patrol B"),
            String::from("Start: 06:00"),
            String::from("Scheduled end: 14:00"),
        ]
    );
}
