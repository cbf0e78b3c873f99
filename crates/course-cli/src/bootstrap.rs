use anyhow::Context;
use tracing::{info_span, warn};

use course_config::CourseConfig;
use course_db::service::CourseService;
use course_rpc::CourseHandler;

use crate::cli::Cli;

/// Resolve configuration from files, environment and CLI overrides.
pub fn load_config(cli: &Cli) -> anyhow::Result<CourseConfig> {
    let mut config = match &cli.config {
        Some(path) => CourseConfig::load_from(path),
        None => CourseConfig::load_with_dotenv(),
    }
    .context("failed to load course configuration")?;

    if let Some(db) = &cli.db {
        config.database.path.clone_from(db);
    }
    Ok(config)
}

/// Open the store and build the handler serving RPC methods.
pub async fn build_handler(config: &CourseConfig) -> anyhow::Result<CourseHandler> {
    let span = info_span!(
        "course_service",
        db = %config.database.path,
        tree_writes = %config.database.tree_writes
    );
    if config.database.is_in_memory() {
        warn!("database is in memory; nothing written by this command persists");
    }
    let service = CourseService::open(&config.database, span)
        .await
        .with_context(|| format!("failed to open database at {}", config.database.path))?;
    Ok(CourseHandler::new(service))
}
