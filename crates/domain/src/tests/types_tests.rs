// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::test_now;
use crate::{
    DomainError, EntityId, IdGenerator, Incident, LogKind, Mission, MissionLog, MissionStatus,
    ParsedSchedule, PatrolStop, StopStatus, default_sites,
};
use time::Duration;
use time::macros::datetime;

fn create_test_mission(id: u64) -> Mission {
    Mission::start(
        EntityId::new(id),
        ParsedSchedule {
            start_time: datetime!(2026-03-14 08:00 UTC),
            end_time: None,
            details: String::from("Patrol A"),
            mission_type: String::from("Patrol A"),
        },
    )
}

// ============================================================================
// Id generation
// ============================================================================

#[test]
fn test_id_generator_uses_clock_milliseconds() {
    let mut ids: IdGenerator = IdGenerator::new();
    let id: EntityId = ids.next_id(datetime!(1970-01-01 00:00:01 UTC));

    assert_eq!(id.value(), 1000);
    assert_eq!(ids.last_issued(), 1000);
}

#[test]
fn test_id_generator_is_strictly_increasing_within_one_millisecond() {
    let mut ids: IdGenerator = IdGenerator::new();
    let first: EntityId = ids.next_id(test_now());
    let second: EntityId = ids.next_id(test_now());

    assert!(second > first);
}

#[test]
fn test_id_generator_survives_clock_stepping_backwards() {
    let mut ids: IdGenerator = IdGenerator::new();
    let first: EntityId = ids.next_id(test_now());
    let second: EntityId = ids.next_id(test_now() - Duration::hours(1));

    assert!(second > first);
}

#[test]
fn test_id_generator_observe_ignores_older_ids() {
    let mut ids: IdGenerator = IdGenerator::new();
    let issued: EntityId = ids.next_id(test_now());
    ids.observe(EntityId::new(5));

    assert_eq!(ids.last_issued(), issued.value());
}

#[test]
fn test_id_generator_observe_moves_past_restored_ids() {
    let mut ids: IdGenerator = IdGenerator::new();
    ids.observe(EntityId::new(u64::MAX - 10));
    assert_eq!(ids.last_issued(), u64::MAX - 10);
    let next: EntityId = ids.next_id(test_now());

    assert_eq!(next.value(), u64::MAX - 9);
}

// ============================================================================
// Patrol stops
// ============================================================================

#[test]
fn test_stop_depart_sets_departure_and_duration() {
    let arrival = datetime!(2026-03-14 08:10 UTC);
    let stop: PatrolStop = PatrolStop::arrive(EntityId::new(1), String::from("Lobby"), arrival);
    assert!(stop.is_on_site());
    assert_eq!(stop.duration(), None);

    let closed: PatrolStop = stop.depart(arrival + Duration::minutes(75)).unwrap();

    assert_eq!(closed.status(), StopStatus::Completed);
    assert_eq!(
        closed.departure_time(),
        Some(arrival + Duration::minutes(75))
    );
    assert_eq!(closed.duration(), Some("1h 15m"));
    assert_eq!(closed.id(), stop.id());
}

#[test]
fn test_stop_cannot_be_closed_twice() {
    let arrival = datetime!(2026-03-14 08:10 UTC);
    let closed: PatrolStop = PatrolStop::arrive(EntityId::new(1), String::from("Lobby"), arrival)
        .depart(arrival + Duration::minutes(5))
        .unwrap();

    let result = closed.depart(arrival + Duration::minutes(50));

    assert!(matches!(result, Err(DomainError::StopAlreadyClosed { .. })));
}

// ============================================================================
// Mission logs
// ============================================================================

#[test]
fn test_archive_copies_mission_fields_and_computes_duration() {
    let mission: Mission = create_test_mission(7);
    let incident: Incident = Incident::new(
        EntityId::new(9),
        String::from("Theft"),
        String::from("Lobby"),
        String::from("bag stolen"),
        datetime!(2026-03-14 09:00 UTC),
    );

    let log: MissionLog = MissionLog::archive(
        EntityId::new(10),
        mission,
        datetime!(2026-03-14 16:20 UTC),
        Vec::new(),
        vec![incident.clone()],
    );

    assert_eq!(log.kind(), LogKind::Mission);
    assert_eq!(log.mission_id(), EntityId::new(7));
    assert_eq!(log.mission_type(), "Patrol A");
    assert_eq!(log.duration(), "8h 20m");
    assert_eq!(log.incidents(), &[incident]);
    assert_eq!(log.summary(), None);
}

#[test]
fn test_report_references_running_mission() {
    let mission: Mission = create_test_mission(7);

    let log: MissionLog = MissionLog::report(
        EntityId::new(11),
        &mission,
        datetime!(2026-03-14 10:00 UTC),
        String::from("All quiet"),
        Vec::new(),
        Vec::new(),
    );

    assert_eq!(log.kind(), LogKind::Report);
    assert_eq!(log.mission_id(), mission.id);
    assert_eq!(log.duration(), "2h 0m");
    assert_eq!(log.summary(), Some("All quiet"));
    assert_eq!(mission.status, MissionStatus::Active);
}

#[test]
fn test_default_sites_have_distinct_ids() {
    let sites = default_sites();

    assert!(!sites.is_empty());
    for (index, site) in sites.iter().enumerate() {
        assert!(sites[index + 1..].iter().all(|other| other.id != site.id));
    }
}
