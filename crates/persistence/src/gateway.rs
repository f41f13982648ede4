// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed access to the five logical stores.

use patrol_log::SessionSnapshot;
use patrol_log_domain::{Bolo, MissionLog, Poi, Site};
use time::OffsetDateTime;
use tracing::debug;

use crate::data_models::{
    BolosRecord, HistoryRecord, PoisRecord, SitesRecord, SnapshotRecord, StoreRecord,
    VersionedBody,
};
use crate::error::PersistenceError;
use crate::store::{DocumentStore, StoredDocument};

/// Reads and writes versioned records through a [`DocumentStore`].
#[derive(Debug)]
pub struct Gateway<S> {
    store: S,
}

impl<S: DocumentStore> Gateway<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consumes the gateway and returns its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Loads a record.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read, the stored version does
    /// not match `R::VERSION`, or the body cannot be decoded.
    pub fn load<R: StoreRecord>(&mut self) -> Result<Option<R>, PersistenceError> {
        let Some(document) = self.store.load(R::KEY)? else {
            debug!(key = R::KEY, "Store is empty");
            return Ok(None);
        };
        decode::<R>(&document).map(Some)
    }

    /// Loads a record, or its default when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored record exists but cannot be read.
    pub fn load_or_default<R: StoreRecord + Default>(&mut self) -> Result<R, PersistenceError> {
        Ok(self.load::<R>()?.unwrap_or_default())
    }

    /// Writes a record, replacing whatever was stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or written.
    pub fn save<R: StoreRecord>(
        &mut self,
        record: &R,
        saved_at: OffsetDateTime,
    ) -> Result<(), PersistenceError> {
        let body: String = serde_json::to_string(&VersionedBody {
            version: R::VERSION,
            data: record,
        })?;
        self.store.save(R::KEY, R::VERSION, &body, saved_at)
    }

    /// Removes a record.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn remove<R: StoreRecord>(&mut self) -> Result<(), PersistenceError> {
        self.store.remove(R::KEY)
    }

    // ========================================================================
    // Typed stores
    // ========================================================================

    /// Loads mission history, newest first. Empty when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if stored history cannot be read.
    pub fn load_history(&mut self) -> Result<Vec<MissionLog>, PersistenceError> {
        Ok(self.load_or_default::<HistoryRecord>()?.entries)
    }

    /// Writes the full mission history.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be written.
    pub fn save_history(
        &mut self,
        entries: &[MissionLog],
        saved_at: OffsetDateTime,
    ) -> Result<(), PersistenceError> {
        self.save(
            &HistoryRecord {
                entries: entries.to_vec(),
            },
            saved_at,
        )
    }

    /// Loads sites. `None` when the store has never been seeded.
    ///
    /// # Errors
    ///
    /// Returns an error if stored sites cannot be read.
    pub fn load_sites(&mut self) -> Result<Option<Vec<Site>>, PersistenceError> {
        Ok(self.load::<SitesRecord>()?.map(|record| record.sites))
    }

    /// Writes the site list.
    ///
    /// # Errors
    ///
    /// Returns an error if the sites cannot be written.
    pub fn save_sites(
        &mut self,
        sites: &[Site],
        saved_at: OffsetDateTime,
    ) -> Result<(), PersistenceError> {
        self.save(
            &SitesRecord {
                sites: sites.to_vec(),
            },
            saved_at,
        )
    }

    /// Loads BOLOs. Empty when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if stored BOLOs cannot be read.
    pub fn load_bolos(&mut self) -> Result<Vec<Bolo>, PersistenceError> {
        Ok(self.load_or_default::<BolosRecord>()?.bolos)
    }

    /// Writes the BOLO list.
    ///
    /// # Errors
    ///
    /// Returns an error if the BOLOs cannot be written.
    pub fn save_bolos(
        &mut self,
        bolos: &[Bolo],
        saved_at: OffsetDateTime,
    ) -> Result<(), PersistenceError> {
        self.save(
            &BolosRecord {
                bolos: bolos.to_vec(),
            },
            saved_at,
        )
    }

    /// Loads points of interest. Empty when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if stored POIs cannot be read.
    pub fn load_pois(&mut self) -> Result<Vec<Poi>, PersistenceError> {
        Ok(self.load_or_default::<PoisRecord>()?.pois)
    }

    /// Writes the POI list.
    ///
    /// # Errors
    ///
    /// Returns an error if the POIs cannot be written.
    pub fn save_pois(
        &mut self,
        pois: &[Poi],
        saved_at: OffsetDateTime,
    ) -> Result<(), PersistenceError> {
        self.save(
            &PoisRecord {
                pois: pois.to_vec(),
            },
            saved_at,
        )
    }

    /// Loads the in-progress session snapshot, if one was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored snapshot cannot be read.
    pub fn load_snapshot(&mut self) -> Result<Option<SessionSnapshot>, PersistenceError> {
        Ok(self.load::<SnapshotRecord>()?.map(|record| record.snapshot))
    }

    /// Writes the in-progress session snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub fn save_snapshot(&mut self, snapshot: &SessionSnapshot) -> Result<(), PersistenceError> {
        self.save(
            &SnapshotRecord {
                snapshot: snapshot.clone(),
            },
            snapshot.saved_at,
        )
    }

    /// Removes the in-progress session snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn clear_snapshot(&mut self) -> Result<(), PersistenceError> {
        self.remove::<SnapshotRecord>()
    }
}

fn decode<R: StoreRecord>(document: &StoredDocument) -> Result<R, PersistenceError> {
    if document.schema_version != R::VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            key: R::KEY.to_string(),
            found: document.schema_version,
            expected: R::VERSION,
        });
    }

    let body: VersionedBody<R> =
        serde_json::from_str(&document.body).map_err(|e| PersistenceError::CorruptRecord {
            key: R::KEY.to_string(),
            reason: e.to_string(),
        })?;

    if body.version != R::VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            key: R::KEY.to_string(),
            found: body.version,
            expected: R::VERSION,
        });
    }

    Ok(body.data)
}
