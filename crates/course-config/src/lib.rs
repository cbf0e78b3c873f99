//! # course-config
//!
//! Layered configuration loading for the course service using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COURSE_*` prefix, `__` as separator)
//! 2. Project-level `course.toml` in the working directory
//! 3. User-level `~/.config/course/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `COURSE_DATABASE__PATH` -> `database.path`,
//! `COURSE_DATABASE__TREE_WRITES` -> `database.tree_writes`, etc.
//!
//! ```no_run
//! use course_config::CourseConfig;
//!
//! let config = CourseConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod database;
mod error;
mod log;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use log::LogConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CourseConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl CourseConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration with an explicit TOML file layered above the
    /// default files and below the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let figment = Self::file_layers()
            .merge(Toml::file(path))
            .merge(Self::env_layer());
        Self::from_figment(figment)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or stack providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::file_layers().merge(Self::env_layer())
    }

    /// Extract and validate.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn file_layers() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from("course.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    fn env_layer() -> Env {
        Env::prefixed("COURSE_").split("__")
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("course").join("config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if !self.log.has_known_level() {
            return Err(ConfigError::InvalidValue {
                field: "log.level".into(),
                reason: format!("unknown level '{}'", self.log.level),
            });
        }
        Ok(())
    }
}
