// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Document queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::diesel_schema::documents;
use crate::error::PersistenceError;
use crate::store::StoredDocument;

/// Diesel Queryable struct for document rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = documents)]
struct DocumentRow {
    schema_version: i32,
    body: String,
}

/// Retrieves the document stored under `key`.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if nothing is stored under `key`.
pub fn load_document(
    conn: &mut SqliteConnection,
    key: &str,
) -> Result<Option<StoredDocument>, PersistenceError> {
    debug!(key, "Loading document");

    let row: Option<DocumentRow> = documents::table
        .filter(documents::store_key.eq(key))
        .select(DocumentRow::as_select())
        .first::<DocumentRow>(conn)
        .optional()?;

    Ok(row.map(|row| StoredDocument {
        schema_version: row.schema_version,
        body: row.body,
    }))
}

/// Lists the keys that currently hold a document.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_keys(conn: &mut SqliteConnection) -> Result<Vec<String>, PersistenceError> {
    Ok(documents::table
        .select(documents::store_key)
        .order(documents::store_key.asc())
        .load::<String>(conn)?)
}
