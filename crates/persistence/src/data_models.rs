// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Versioned records, one per logical store.

use patrol_log::SessionSnapshot;
use patrol_log_domain::{Bolo, MissionLog, Poi, Site};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record type with a fixed store key and schema version.
pub trait StoreRecord: Serialize + DeserializeOwned {
    /// The store key the record lives under.
    const KEY: &'static str;
    /// The schema version this build reads and writes.
    const VERSION: i32;
}

/// The on-disk body: the record wrapped with its version.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct VersionedBody<T> {
    pub version: i32,
    pub data: T,
}

/// Archived missions and reports, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub entries: Vec<MissionLog>,
}

impl StoreRecord for HistoryRecord {
    const KEY: &'static str = "mission_history";
    const VERSION: i32 = 1;
}

/// Patrol sites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitesRecord {
    pub sites: Vec<Site>,
}

impl StoreRecord for SitesRecord {
    const KEY: &'static str = "sites";
    const VERSION: i32 = 1;
}

/// Active BOLOs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BolosRecord {
    pub bolos: Vec<Bolo>,
}

impl StoreRecord for BolosRecord {
    const KEY: &'static str = "bolos";
    const VERSION: i32 = 1;
}

/// Points of interest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoisRecord {
    pub pois: Vec<Poi>,
}

impl StoreRecord for PoisRecord {
    const KEY: &'static str = "pois";
    const VERSION: i32 = 1;
}

/// The in-progress session. Absent while idle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub snapshot: SessionSnapshot,
}

impl StoreRecord for SnapshotRecord {
    const KEY: &'static str = "active_session";
    const VERSION: i32 = 1;
}
