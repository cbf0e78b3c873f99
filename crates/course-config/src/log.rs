//! Logging configuration.

use serde::{Deserialize, Serialize};

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Default filter directive when `COURSE_LOG_FILTER` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LogConfig {
    /// Whether `level` is one of the plain tracing levels.
    #[must_use]
    pub fn has_known_level(&self) -> bool {
        LEVELS.contains(&self.level.to_ascii_lowercase().as_str())
    }
}
