//! Database error types for course-db.

use course_core::errors::ErrorKind;
use thiserror::Error;

/// Errors from storage access.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// An insert or update hit a uniqueness constraint.
    #[error("{entity} already exists")]
    AlreadyExists { entity: &'static str },

    /// A single-row lookup matched nothing.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// Input rejected before any SQL ran.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// A statement failed for any other reason.
    #[error("{op}: {source}")]
    Storage {
        op: &'static str,
        #[source]
        source: libsql::Error,
    },

    /// Underlying libSQL error outside a named operation.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl DatabaseError {
    pub(crate) const fn storage(op: &'static str, source: libsql::Error) -> Self {
        Self::Storage { op, source }
    }

    /// Classify into the shared taxonomy.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
            Self::InvalidState(_) | Self::Migration(_) | Self::Storage { .. } | Self::LibSql(_) => {
                ErrorKind::Storage
            }
        }
    }
}
