//! Notion storage implementation for the daily activity log.
//!
//! Activities live as pages of a single Notion database. This crate holds the
//! HTTP client for the Notion API, the mapping between `Activity` and the
//! database's page properties, and the repository implementing
//! `daylog_core::activities::ActivityRepositoryTrait`.

pub mod activities;
pub mod client;

pub use activities::{decode_page, encode_properties, NotionActivityRepository, PropertySchema};
pub use client::{NotionApi, NotionClient, DEFAULT_NOTION_API_URL, NOTION_API_VERSION};
