//! # tender-db
//!
//! libSQL persistence for the procurement workflow.
//!
//! [`TenderDb`] owns one connection and implements the
//! `tender-engine` store traits on top of it. Every mutation is a single
//! `UPDATE ... RETURNING` statement so version bumps are atomic without any
//! application-level locking.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
mod store;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for tenders, bids and the employee directory.
pub struct TenderDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl TenderDb {
    /// Open a local database file, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        tracing::debug!(path, "opened local database");
        Self::init(db).await
    }

    /// Connect to a remote libSQL server.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection or migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        tracing::debug!(url, "connected to remote database");
        Self::init(db).await
    }

    async fn init(db: libsql::Database) -> Result<Self, DatabaseError> {
        let conn = db.connect()?;

        // Per-connection in SQLite
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let tender_db = Self { db, conn };
        tender_db.run_migrations().await?;
        Ok(tender_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"tnd-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }

    /// Liveness check: runs `SELECT 1`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database does not answer.
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        let mut rows = self.conn.query("SELECT 1", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        if row.get::<i64>(0)? != 1 {
            return Err(DatabaseError::Query("ping returned an unexpected value".into()));
        }
        Ok(())
    }
}
