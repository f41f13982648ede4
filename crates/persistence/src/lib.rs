// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Patrol Log.
//!
//! State is kept as five whole documents, one per logical store:
//!
//! - `mission_history`: archived missions and reports
//! - `sites`: patrol sites
//! - `bolos`: active BOLOs
//! - `pois`: points of interest
//! - `active_session`: the in-progress session snapshot
//!
//! Every document carries a schema version, both in its row and inside its
//! body. A missing document reads as the record's default; a document with an
//! unknown version or a malformed body is an error and is never overwritten
//! silently.
//!
//! ## Backends
//!
//! - **`SQLite`** through Diesel, either a file (WAL mode) or a shared
//!   in-memory database
//! - **In-memory map** ([`MemoryStore`]) for unit tests
//!
//! ## Testing Philosophy
//!
//! - Each `new_in_memory()` call gets its own database, so tests are isolated
//! - Record encoding is tested against the map store; Diesel plumbing against
//!   in-memory `SQLite`

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod gateway;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

pub use data_models::{
    BolosRecord, HistoryRecord, PoisRecord, SitesRecord, SnapshotRecord, StoreRecord,
};
pub use error::PersistenceError;
pub use gateway::Gateway;
pub use store::{DocumentStore, MemoryStore, StoredDocument};

/// `SQLite` document store.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence").finish_non_exhaustive()
    }
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared in-memory database via an atomic
    /// counter, so adapters never see each other's documents.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_patrol_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        backend::sqlite::configure_file_database(&mut conn)?;

        Ok(Self { conn })
    }

    /// Lists the store keys that currently hold a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn stored_keys(&mut self) -> Result<Vec<String>, PersistenceError> {
        queries::list_keys(&mut self.conn)
    }
}

impl DocumentStore for Persistence {
    fn load(&mut self, key: &str) -> Result<Option<StoredDocument>, PersistenceError> {
        queries::load_document(&mut self.conn, key)
    }

    fn save(
        &mut self,
        key: &str,
        schema_version: i32,
        body: &str,
        updated_at: OffsetDateTime,
    ) -> Result<(), PersistenceError> {
        mutations::replace_document(&mut self.conn, key, schema_version, body, updated_at)
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        mutations::delete_document(&mut self.conn, key)
    }
}
