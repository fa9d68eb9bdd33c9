use anyhow::Context;
use daylog_storage_notion::{PropertySchema, DEFAULT_NOTION_API_URL};
use std::net::SocketAddr;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub static_dir: String,
    pub notion: NotionConfig,
}

/// Connection settings for the Notion database holding the activities.
pub struct NotionConfig {
    /// Integration token. Required to build the state, optional here so the
    /// router can be configured without credentials.
    pub token: Option<String>,
    pub database_id: Option<String>,
    pub api_url: String,
    pub schema: PropertySchema,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let raw_addr = env_or("DAYLOG_LISTEN_ADDR", "0.0.0.0:8080");
        let listen_addr: SocketAddr = raw_addr
            .parse()
            .with_context(|| format!("Invalid DAYLOG_LISTEN_ADDR '{}'", raw_addr))?;
        let cors_allow = env_or("DAYLOG_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let static_dir = env_or("DAYLOG_STATIC_DIR", "public");

        let defaults = PropertySchema::default();
        let notion = NotionConfig {
            token: non_empty_env("NOTION_TOKEN"),
            database_id: non_empty_env("NOTION_DATABASE_ID"),
            api_url: env_or("NOTION_API_URL", DEFAULT_NOTION_API_URL),
            schema: PropertySchema {
                date: env_or("NOTION_PROP_DATE", &defaults.date),
                time: env_or("NOTION_PROP_TIME", &defaults.time),
                category: env_or("NOTION_PROP_CATEGORY", &defaults.category),
                note: env_or("NOTION_PROP_NOTE", &defaults.note),
                amount: env_or("NOTION_PROP_AMOUNT", &defaults.amount),
            },
        };

        Ok(Self {
            listen_addr,
            cors_allow,
            static_dir,
            notion,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
