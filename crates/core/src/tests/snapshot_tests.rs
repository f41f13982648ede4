// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_state, run, run_all, test_now};
use crate::{CoreError, Session, SessionSnapshot, State};
use patrol_log_domain::{EntityId, PatrolStop};

#[test]
fn test_snapshot_restores_verbatim() {
    let state: State = run_all(
        &create_test_state(),
        &["start Patrol A", "onsite Lobby", "incident Theft Lobby bag"],
    );
    let snapshot: SessionSnapshot = state.session.to_snapshot(test_now());

    let json: String = serde_json::to_string(&snapshot).unwrap();
    let decoded: SessionSnapshot = serde_json::from_str(&json).unwrap();
    let restored: Session = Session::restore(decoded).unwrap();

    assert_eq!(restored, state.session);
}

#[test]
fn test_snapshot_with_two_open_stops_is_rejected() {
    let state: State = run_all(&create_test_state(), &["start Patrol A", "onsite Lobby"]);
    let mut session: Session = state.session;
    session.patrol_stops.push(PatrolStop::arrive(
        EntityId::new(1),
        String::from("Garage"),
        test_now(),
    ));

    let err: CoreError = Session::restore(session.to_snapshot(test_now())).unwrap_err();

    assert!(matches!(err, CoreError::InvalidSnapshot(_)));
}

#[test]
fn test_snapshot_on_site_flag_must_match_open_stop() {
    let state: State = run_all(&create_test_state(), &["start Patrol A"]);
    let mut session: Session = state.session;
    session.on_site = true;

    assert!(session.validate().is_err());
}

#[test]
fn test_snapshot_idle_with_stops_is_rejected() {
    let mut session: Session = Session::idle();
    session.patrol_stops.push(PatrolStop::arrive(
        EntityId::new(1),
        String::from("Lobby"),
        test_now(),
    ));

    assert!(session.validate().is_err());
}

#[test]
fn test_restored_state_issues_ids_after_stored_ones() {
    let state: State = run_all(&create_test_state(), &["start Patrol A", "onsite Lobby"]);
    let last_stop: EntityId = state.session.patrol_stops[0].id();

    let restored: State = State::restore(
        state.session.clone(),
        state.history.clone(),
        state.bolos.clone(),
        state.sites.clone(),
        state.pois.clone(),
    );
    // A clock reading far in the past must not reuse an identifier
    let result = run(
        &restored,
        "incident Theft Lobby bag",
        time::macros::datetime!(2020-01-01 00:00 UTC),
    );

    assert!(result.new_state.session.incidents[0].id() > last_stop);
}
