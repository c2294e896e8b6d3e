//! Row-to-entity parsing helpers.
//!
//! `libsql::Row` is column-indexed; these helpers convert the TEXT columns
//! the items table uses for timestamps and attributes into typed values.

use chrono::{DateTime, Utc};
use lms_core::entities::Attributes;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`), the latter produced by the column default.
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

/// Parse the `attributes` column. Empty text is treated as an empty object.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the text is not a JSON object.
pub fn parse_attributes(s: &str) -> Result<Attributes, DatabaseError> {
    if s.trim().is_empty() {
        return Ok(Attributes::new());
    }
    serde_json::from_str(s)
        .map_err(|e| DatabaseError::Query(format!("Invalid attributes JSON '{s}': {e}")))
}

/// Serialize attributes for storage.
///
/// # Errors
///
/// Returns `DatabaseError::Other` if serialization fails.
pub fn attributes_to_text(attributes: &Attributes) -> Result<String, DatabaseError> {
    serde_json::to_string(attributes).map_err(|e| DatabaseError::Other(e.into()))
}
