//! Row parsing and error classification helpers shared by the repos.

use crate::error::DatabaseError;

/// Detect a uniqueness-constraint failure.
///
/// `SQLite` reports these as `SQLITE_CONSTRAINT` with a message of the form
/// `UNIQUE constraint failed: course.title`. Primary-key collisions use the
/// same wording. Foreign-key and NOT NULL failures do not match.
pub fn is_unique_violation(e: &libsql::Error) -> bool {
    e.to_string().contains("UNIQUE constraint failed")
}

/// Map a write failure: uniqueness violations become `AlreadyExists`,
/// everything else is wrapped with the operation name.
pub fn classify_write(op: &'static str, entity: &'static str, e: libsql::Error) -> DatabaseError {
    if is_unique_violation(&e) {
        DatabaseError::AlreadyExists { entity }
    } else {
        DatabaseError::storage(op, e)
    }
}

/// Reject identifiers that cannot name a stored row.
///
/// # Errors
///
/// Returns `DatabaseError::Validation` for zero or negative ids.
pub fn require_id(entity: &'static str, id: i64) -> Result<i64, DatabaseError> {
    if id > 0 {
        Ok(id)
    } else {
        Err(DatabaseError::Validation(format!(
            "{entity} update needs a stored id, got {id}"
        )))
    }
}

/// Read an INTEGER column declared to hold an `i32` value.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if the stored value does not fit.
pub fn get_i32(row: &libsql::Row, idx: i32) -> Result<i32, DatabaseError> {
    let value = row.get::<i64>(idx)?;
    i32::try_from(value)
        .map_err(|_| DatabaseError::InvalidState(format!("column {idx} holds {value}, not an i32")))
}

/// Read a nullable TEXT column.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    Ok(row.get::<Option<String>>(idx)?)
}

/// Read a nullable INTEGER column used as a boolean flag.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_bool(row: &libsql::Row, idx: i32) -> Result<Option<bool>, DatabaseError> {
    Ok(row.get::<Option<i64>>(idx)?.map(|v| v != 0))
}
