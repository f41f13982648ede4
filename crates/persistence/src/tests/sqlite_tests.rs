// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::test_now;
use crate::{DocumentStore, Persistence, StoredDocument};

#[test]
fn test_in_memory_database_initializes() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    assert!(persistence.stored_keys().unwrap().is_empty());
}

#[test]
fn test_missing_key_loads_as_none() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    assert_eq!(persistence.load("sites").unwrap(), None);
}

#[test]
fn test_save_then_load() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    persistence
        .save("sites", 1, "{\"version\":1}", test_now())
        .unwrap();

    assert_eq!(
        persistence.load("sites").unwrap(),
        Some(StoredDocument {
            schema_version: 1,
            body: String::from("{\"version\":1}"),
        })
    );
}

#[test]
fn test_save_replaces_whole_document() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    persistence.save("bolos", 1, "first", test_now()).unwrap();
    persistence.save("bolos", 2, "second", test_now()).unwrap();

    let document: StoredDocument = persistence.load("bolos").unwrap().unwrap();
    assert_eq!(document.schema_version, 2);
    assert_eq!(document.body, "second");
    assert_eq!(
        persistence.stored_keys().unwrap(),
        vec![String::from("bolos")]
    );
}

#[test]
fn test_remove_deletes_document() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .save("active_session", 1, "{}", test_now())
        .unwrap();

    persistence.remove("active_session").unwrap();
    persistence.remove("active_session").unwrap();

    assert_eq!(persistence.load("active_session").unwrap(), None);
}

#[test]
fn test_in_memory_databases_are_isolated() {
    let mut first: Persistence = Persistence::new_in_memory().unwrap();
    let mut second: Persistence = Persistence::new_in_memory().unwrap();

    first.save("pois", 1, "[]", test_now()).unwrap();

    assert!(second.load("pois").unwrap().is_none());
}

#[test]
fn test_file_database_survives_reopen() {
    let path: std::path::PathBuf = std::env::temp_dir().join(format!(
        "patrol-log-test-{}-{}.db",
        std::process::id(),
        test_now().unix_timestamp()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
        persistence
            .save("mission_history", 1, "kept", test_now())
            .unwrap();
    }

    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();
    let document: StoredDocument = reopened.load("mission_history").unwrap().unwrap();
    assert_eq!(document.body, "kept");

    drop(reopened);
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
}
