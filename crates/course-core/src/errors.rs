//! Error classification shared by every layer.
//!
//! Each crate defines its own error enum (`DatabaseError`, `ServiceError`,
//! `Status`). They all classify into [`ErrorKind`] so tests and logs can tell
//! failures apart even where the RPC boundary cannot.

use serde::Serialize;
use std::fmt;

/// The internal error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A uniqueness constraint rejected an insert.
    AlreadyExists,
    /// A single-row fetch matched nothing.
    NotFound,
    /// Any other persistence failure.
    Storage,
    /// Input rejected before reaching the store.
    Validation,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlreadyExists => "already_exists",
            Self::NotFound => "not_found",
            Self::Storage => "storage",
            Self::Validation => "validation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
