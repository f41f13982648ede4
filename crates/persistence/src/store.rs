// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;
use time::OffsetDateTime;
use tracing::debug;

use crate::error::PersistenceError;

/// A serialized record as held by a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    /// The record version the body was written with.
    pub schema_version: i32,
    /// The serialized record.
    pub body: String,
}

/// A durable key/value store of whole documents.
///
/// Writes always replace the full document under a key; there are no
/// partial updates.
pub trait DocumentStore {
    /// Loads the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn load(&mut self, key: &str) -> Result<Option<StoredDocument>, PersistenceError>;

    /// Replaces the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn save(
        &mut self,
        key: &str,
        schema_version: i32,
        body: &str,
        updated_at: OffsetDateTime,
    ) -> Result<(), PersistenceError>;

    /// Removes the document stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;
}

/// A process-local store backed by a map.
///
/// Writes can be made to fail on demand to exercise error paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: HashMap<String, StoredDocument>,
    fail_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later `save` and `remove` fail until switched back.
    pub const fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Places a raw document under `key`, bypassing record encoding.
    pub fn insert_raw(&mut self, key: &str, schema_version: i32, body: &str) {
        self.documents.insert(
            key.to_string(),
            StoredDocument {
                schema_version,
                body: body.to_string(),
            },
        );
    }

    /// Returns whether a document is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.documents.contains_key(key)
    }

    fn check_writable(&self, key: &str) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::WriteRejected(format!(
                "store '{key}' is read-only"
            )));
        }
        Ok(())
    }
}

impl DocumentStore for MemoryStore {
    fn load(&mut self, key: &str) -> Result<Option<StoredDocument>, PersistenceError> {
        Ok(self.documents.get(key).cloned())
    }

    fn save(
        &mut self,
        key: &str,
        schema_version: i32,
        body: &str,
        _updated_at: OffsetDateTime,
    ) -> Result<(), PersistenceError> {
        self.check_writable(key)?;
        self.insert_raw(key, schema_version, body);
        debug!(key, schema_version, "Document saved in memory");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.check_writable(key)?;
        self.documents.remove(key);
        Ok(())
    }
}
