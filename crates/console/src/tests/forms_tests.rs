// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_console, submit_all};
use crate::{ConsoleError, ConsoleReply};
use patrol_log::{FormKind, SequenceError};

#[test]
fn test_incident_form_runs_the_composed_command() {
    let (mut console, clock) = create_test_console();
    submit_all(&mut console, &clock, &["start Patrol A"]);

    let opened: ConsoleReply = console.begin_form(FormKind::Incident).unwrap();
    assert_eq!(opened.awaiting.as_deref(), Some("Incident type:"));

    let step: ConsoleReply = console.submit("Trespass");
    assert_eq!(step.awaiting.as_deref(), Some("Location:"));
    console.submit("North \"Lot\"");
    let done: ConsoleReply = console.submit("Two people climbing the fence");

    assert!(done.awaiting.is_none());
    assert!(
        done.lines[0]
            .starts_with("Incident logged: Trespass at North 'Lot'")
    );
    assert_eq!(console.session().incidents.len(), 1);
    assert_eq!(
        console.session().incidents[0].description(),
        "Two people climbing the fence"
    );
    assert!(console.awaiting().is_none());
}

#[test]
fn test_required_field_is_asked_again() {
    let (mut console, _clock) = create_test_console();
    console.begin_form_named("bolo").unwrap();

    let reply: ConsoleReply = console.submit("   ");

    assert_eq!(reply.lines, vec![String::from("This field is required.")]);
    assert_eq!(reply.awaiting.as_deref(), Some("Subject:"));
}

#[test]
fn test_second_form_is_rejected() {
    let (mut console, _clock) = create_test_console();
    console.begin_form(FormKind::Poi).unwrap();

    let err: ConsoleError = console.begin_form(FormKind::Bolo).unwrap_err();

    assert!(matches!(err, ConsoleError::Form(SequenceError::AlreadyActive)));
    assert_eq!(console.awaiting(), Some("Name:"));
}

#[test]
fn test_cancel_discards_the_form() {
    let (mut console, _clock) = create_test_console();
    console.begin_form(FormKind::Poi).unwrap();
    console.submit("Loading dock");

    assert!(console.cancel_form());
    assert!(!console.cancel_form());
    assert!(console.state().pois.is_empty());

    // Input goes back to the interpreter
    let reply: ConsoleReply = console.submit("pois");
    assert_eq!(
        reply.lines,
        vec![String::from("No points of interest recorded.")]
    );
}

#[test]
fn test_unknown_form_name() {
    let (mut console, _clock) = create_test_console();

    assert!(matches!(
        console.begin_form_named("lunch"),
        Err(ConsoleError::UnknownForm(name)) if name == "lunch"
    ));
}

#[test]
fn test_start_form_with_blank_times_starts_now() {
    let (mut console, _clock) = create_test_console();
    console.begin_form(FormKind::Start).unwrap();

    console.submit("");
    console.submit("");
    let done: ConsoleReply = console.submit("Night rounds");

    assert_eq!(done.lines[0], "Mission started: Night rounds");
    assert!(console.session().is_active());
}
