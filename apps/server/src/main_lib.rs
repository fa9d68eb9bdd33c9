use std::sync::Arc;

use crate::config::Config;
use daylog_core::activities::{ActivityService, ActivityServiceTrait};
use daylog_core::errors::Error as CoreError;
use daylog_storage_notion::{NotionActivityRepository, NotionApi, NotionClient};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub activity_service: Arc<dyn ActivityServiceTrait + Send + Sync>,
}

impl AppState {
    pub fn new(activity_service: Arc<dyn ActivityServiceTrait + Send + Sync>) -> Arc<Self> {
        Arc::new(Self { activity_service })
    }
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Builds the shared state. The Notion client is created once here and
/// reused by every request.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let token = config
        .notion
        .token
        .as_deref()
        .ok_or_else(|| CoreError::MissingConfigKey("NOTION_TOKEN".to_string()))?;
    let database_id = config
        .notion
        .database_id
        .as_deref()
        .ok_or_else(|| CoreError::MissingConfigKey("NOTION_DATABASE_ID".to_string()))?;

    let client: Arc<dyn NotionApi> = Arc::new(NotionClient::new(&config.notion.api_url, token)?);
    let activity_repository = Arc::new(NotionActivityRepository::new(
        client,
        database_id,
        config.notion.schema.clone(),
    ));
    let activity_service = Arc::new(ActivityService::new(activity_repository));

    tracing::info!(
        "Using Notion database {} at {}",
        database_id,
        config.notion.api_url
    );
    Ok(AppState::new(activity_service))
}
