//! Relational store configuration.

use course_core::enums::TreeWriteMode;
use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "course.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Commit behaviour of nested create/update requests.
    #[serde(default)]
    pub tree_writes: TreeWriteMode,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            tree_writes: TreeWriteMode::default(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the database lives only for the life of the process.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}
