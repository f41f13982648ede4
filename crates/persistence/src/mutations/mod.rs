// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Document mutations. Every write replaces the whole document.

use diesel::prelude::*;
use diesel::SqliteConnection;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

use crate::diesel_schema::documents;
use crate::error::PersistenceError;

/// Stores `body` under `key`, replacing any previous document.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `key` - The store key
/// * `schema_version` - The record version `body` was written with
/// * `body` - The serialized record
/// * `updated_at` - When the write happened
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn replace_document(
    conn: &mut SqliteConnection,
    key: &str,
    schema_version: i32,
    body: &str,
    updated_at: OffsetDateTime,
) -> Result<(), PersistenceError> {
    let updated_at: String = updated_at
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

    diesel::replace_into(documents::table)
        .values((
            documents::store_key.eq(key),
            documents::schema_version.eq(schema_version),
            documents::body.eq(body),
            documents::updated_at.eq(&updated_at),
        ))
        .execute(conn)?;

    debug!(key, schema_version, bytes = body.len(), "Document saved");
    Ok(())
}

/// Deletes the document stored under `key`. Deleting a missing key is not an error.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_document(conn: &mut SqliteConnection, key: &str) -> Result<(), PersistenceError> {
    let removed: usize =
        diesel::delete(documents::table.filter(documents::store_key.eq(key))).execute(conn)?;
    debug!(key, removed, "Document removed");
    Ok(())
}
