//! Row-to-entity parsing helpers.
//!
//! Timestamps are written as RFC 3339 by the repos but columns default to
//! `SQLite`'s `datetime('now')` format, so both are accepted on read.

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Stored values use the same PascalCase spelling as the wire format.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read the first column of the first row as a boolean (`SELECT EXISTS(...)`).
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` when the query yields no row.
pub async fn first_bool(mut rows: libsql::Rows) -> Result<bool, DatabaseError> {
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)? != 0)
}

/// Convert a `u32` page bound into a SQL integer.
#[must_use]
pub fn sql_int(n: u32) -> i64 {
    i64::from(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tender_core::enums::{ServiceType, TenderStatus};

    #[rstest]
    #[case(0, 0)]
    #[case(5, 5)]
    #[case(u32::MAX, 4_294_967_295)]
    fn widens_page_bounds(#[case] value: u32, #[case] expected: i64) {
        assert_eq!(sql_int(value), expected);
    }

    #[test]
    fn parses_both_datetime_formats() {
        let rfc = parse_datetime("2026-02-09T14:30:00+00:00").unwrap();
        let sqlite = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(rfc, sqlite);
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn parses_stored_enum_spelling() {
        assert_eq!(
            parse_enum::<TenderStatus>("Published").unwrap(),
            TenderStatus::Published
        );
        assert_eq!(
            parse_enum::<ServiceType>("Manufacture").unwrap(),
            ServiceType::Manufacture
        );
        assert!(parse_enum::<TenderStatus>("published").is_err());
    }
}
