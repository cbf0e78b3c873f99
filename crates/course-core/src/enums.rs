//! Enums shared between configuration and the service layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the statements of one tree operation are committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TreeWriteMode {
    /// Every insert/update auto-commits on its own. A failure part-way leaves
    /// the rows written so far in place.
    #[default]
    Independent,
    /// The whole tree runs in one transaction and rolls back on any failure.
    Atomic,
}

impl TreeWriteMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Independent => "independent",
            Self::Atomic => "atomic",
        }
    }

    #[must_use]
    pub const fn is_atomic(self) -> bool {
        matches!(self, Self::Atomic)
    }
}

impl fmt::Display for TreeWriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_independent() {
        assert_eq!(TreeWriteMode::default(), TreeWriteMode::Independent);
        assert!(!TreeWriteMode::default().is_atomic());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&TreeWriteMode::Atomic).unwrap();
        assert_eq!(json, "\"atomic\"");
        let parsed: TreeWriteMode = serde_json::from_str("\"independent\"").unwrap();
        assert_eq!(parsed, TreeWriteMode::Independent);
    }
}
