//! Boundary error returned by every RPC method.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Message carried by every internal status.
pub const INTERNAL_SERVER_ERROR: &str = "internal server error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Code {
    Internal,
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal => f.write_str("internal"),
        }
    }
}

/// What callers see when a method fails.
///
/// Callers cannot tell an existing course from a broken database: both come
/// back as `Internal` with the same message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{code}: {message}")]
pub struct Status {
    pub code: Code,
    pub message: String,
}

impl Status {
    #[must_use]
    pub fn internal() -> Self {
        Self {
            code: Code::Internal,
            message: INTERNAL_SERVER_ERROR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_status_display_and_json() {
        let status = Status::internal();
        assert_eq!(status.to_string(), "internal: internal server error");
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["code"], "internal");
        assert_eq!(json["message"], INTERNAL_SERVER_ERROR);
    }
}
