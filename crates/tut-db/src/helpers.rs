//! Row-to-entity parsing helpers.
//!
//! `SQLite` has no boolean type; flags are stored as `INTEGER` 0/1 and
//! converted here in both directions.

use crate::error::DatabaseError;

/// Read an `INTEGER` 0/1 column as `bool`.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for any value other than 0 or 1.
pub fn get_bool(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    match row.get::<i64>(idx)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(DatabaseError::InvalidState(format!(
            "expected 0 or 1 in boolean column {idx}, found {other}"
        ))),
    }
}

/// Encode a flag for an `INTEGER` column.
#[must_use]
pub fn bool_value(flag: bool) -> libsql::Value {
    libsql::Value::Integer(i64::from(flag))
}
