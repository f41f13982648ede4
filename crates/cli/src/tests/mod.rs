// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crate::display::{recovery_banner, status_bar};
use crate::meta::{MetaInput, form_names};
use crate::{Args, Command};
use clap::Parser;
use patrol_log::Phase;
use patrol_log_console::{Dashboard, Recovery};
use std::time::Duration;

fn idle_dashboard() -> Dashboard {
    Dashboard {
        phase: Phase::Idle,
        mission_type: None,
        elapsed: None,
        location: None,
        patrol_stops: 0,
        incidents: 0,
        history_entries: 0,
        active_bolos: 0,
        recovery_reliable: true,
    }
}

// ============================================================================
// Arguments
// ============================================================================

#[test]
fn test_no_subcommand_defaults() {
    let args: Args = Args::try_parse_from(["patrol"]).unwrap();

    assert!(args.command.is_none());
    assert!(args.database.is_none());
    assert_eq!(args.timezone, "UTC");
    assert_eq!(
        args.settings().unwrap().autosave_interval,
        Duration::from_secs(30)
    );
}

#[test]
fn test_exec_collects_the_whole_line() {
    let args: Args =
        Args::try_parse_from(["patrol", "exec", "onsite", "Main Gate", "-north"]).unwrap();

    match args.command {
        Some(Command::Exec { line }) => assert_eq!(line.join(" "), "onsite Main Gate -north"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_export_requires_output() {
    assert!(Args::try_parse_from(["patrol", "export"]).is_err());

    let args: Args = Args::try_parse_from(["patrol", "export", "--output", "out.csv"]).unwrap();
    assert!(matches!(args.command, Some(Command::Export { .. })));
}

#[test]
fn test_timezone_is_validated() {
    let good: Args = Args::try_parse_from(["patrol", "--timezone", "America/New_York"]).unwrap();
    assert_eq!(
        good.settings().unwrap().timezone,
        chrono_tz::America::New_York
    );

    let bad: Args = Args::try_parse_from(["patrol", "--timezone", "Mars/Olympus"]).unwrap();
    assert!(bad.settings().is_err());
}

#[test]
fn test_zero_autosave_interval_is_raised_to_one_second() {
    let args: Args = Args::try_parse_from(["patrol", "--autosave-secs", "0"]).unwrap();

    assert_eq!(
        args.settings().unwrap().autosave_interval,
        Duration::from_secs(1)
    );
}

// ============================================================================
// Meta inputs
// ============================================================================

#[test]
fn test_quit_words() {
    for word in ["/quit", "quit", "EXIT", "  exit  "] {
        assert_eq!(MetaInput::parse(word), MetaInput::Quit, "{word}");
    }
}

#[test]
fn test_form_inputs() {
    assert_eq!(
        MetaInput::parse("/form incident"),
        MetaInput::BeginForm(String::from("incident"))
    );
    assert_eq!(MetaInput::parse("/form"), MetaInput::ListForms);
    assert_eq!(MetaInput::parse("/cancel"), MetaInput::CancelForm);
    assert!(form_names().contains("checkpoint"));
}

#[test]
fn test_other_lines_pass_through_unchanged() {
    assert_eq!(
        MetaInput::parse("incident Theft \"North Lot\" bike"),
        MetaInput::Line(String::from("incident Theft \"North Lot\" bike"))
    );
    assert_eq!(MetaInput::parse(""), MetaInput::Line(String::new()));
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_status_bar_idle() {
    assert_eq!(status_bar(&idle_dashboard()), "[idle]");
}

#[test]
fn test_status_bar_on_site_and_unsaved() {
    let dashboard: Dashboard = Dashboard {
        phase: Phase::OnSite,
        mission_type: Some(String::from("Patrol A")),
        elapsed: Some(String::from("0h 12m")),
        location: Some(String::from("Main Gate")),
        active_bolos: 2,
        recovery_reliable: false,
        ..idle_dashboard()
    };

    assert_eq!(
        status_bar(&dashboard),
        "[on-site | Patrol A | 0h 12m | at Main Gate | BOLOs: 2 | NOT SAVED]"
    );
}

#[test]
fn test_recovery_banner() {
    assert_eq!(recovery_banner(&Recovery::Fresh), None);
    assert_eq!(
        recovery_banner(&Recovery::Resumed {
            mission_type: String::from("Patrol A")
        })
        .as_deref(),
        Some("Resumed mission in progress: Patrol A")
    );
    assert!(
        recovery_banner(&Recovery::Discarded {
            reason: String::from("bad data")
        })
        .unwrap()
        .contains("bad data")
    );
}
