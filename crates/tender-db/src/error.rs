//! Database error types for tender-db.

use tender_core::errors::StoreError;
use thiserror::Error;

/// `SQLITE_CONSTRAINT` primary result code.
const SQLITE_CONSTRAINT: i32 = 19;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Whether a write was rejected by a foreign key, unique or check constraint.
    #[must_use]
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            Self::LibSql(libsql::Error::SqliteFailure(code, _)) if code & 0xff == SQLITE_CONSTRAINT => {
                true
            }
            Self::LibSql(e) => e.to_string().contains("constraint failed"),
            _ => false,
        }
    }
}

impl From<DatabaseError> for StoreError {
    fn from(err: DatabaseError) -> Self {
        if err.is_constraint_violation() {
            return Self::Constraint(err.to_string());
        }
        match err {
            DatabaseError::Query(msg) => Self::Query(msg),
            DatabaseError::Other(e) => Self::Backend(e),
            other => Self::Backend(other.into()),
        }
    }
}
