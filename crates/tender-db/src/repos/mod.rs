//! Repository modules.
//!
//! Each module adds methods to `TenderDb` via `impl TenderDb` blocks. Method
//! names follow the statement they run (`select_*`, `insert_*_returning`,
//! `update_*_returning`); the engine-facing trait impls delegate to them.

pub mod access;
pub mod bid;
pub mod directory;
pub mod tender;

use crate::error::DatabaseError;

/// Drain `rows` through a row mapper.
pub(crate) async fn collect<T>(
    mut rows: libsql::Rows,
    map: fn(&libsql::Row) -> Result<T, DatabaseError>,
) -> Result<Vec<T>, DatabaseError> {
    let mut out = Vec::new();
    while let Some(row) = rows.next().await? {
        out.push(map(&row)?);
    }
    Ok(out)
}

/// Map the first row, if any.
pub(crate) async fn first<T>(
    mut rows: libsql::Rows,
    map: fn(&libsql::Row) -> Result<T, DatabaseError>,
) -> Result<Option<T>, DatabaseError> {
    rows.next().await?.as_ref().map(map).transpose()
}
