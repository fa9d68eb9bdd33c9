use async_trait::async_trait;
use log::{debug, error};
use std::sync::Arc;

use daylog_core::activities::{Activity, ActivityRepositoryTrait, NewActivity};
use daylog_core::Result;

use super::model::{decode_page, encode_properties, PropertySchema};
use crate::client::{
    CreatePageRequest, DatabaseParent, NotionApi, PropertySort, QueryDatabaseRequest,
    SortDirection, UpdatePageRequest, MAX_PAGE_SIZE,
};

/// Repository storing activities as pages of one Notion database.
pub struct NotionActivityRepository {
    api: Arc<dyn NotionApi>,
    database_id: String,
    schema: PropertySchema,
}

impl NotionActivityRepository {
    pub fn new(api: Arc<dyn NotionApi>, database_id: impl Into<String>, schema: PropertySchema) -> Self {
        Self {
            api,
            database_id: database_id.into(),
            schema,
        }
    }

    fn sorts(&self) -> Vec<PropertySort> {
        vec![
            PropertySort {
                property: self.schema.date.clone(),
                direction: SortDirection::Descending,
            },
            PropertySort {
                property: self.schema.time.clone(),
                direction: SortDirection::Descending,
            },
        ]
    }
}

#[async_trait]
impl ActivityRepositoryTrait for NotionActivityRepository {
    async fn create_activity(&self, new_activity: NewActivity) -> Result<Activity> {
        let request = CreatePageRequest {
            parent: DatabaseParent {
                database_id: self.database_id.clone(),
            },
            properties: encode_properties(&self.schema, &new_activity),
        };

        let page = self
            .api
            .create_page(&request)
            .await
            .inspect_err(|e| error!("Error creating activity page: {}", e))?;

        let created = decode_page(&self.schema, &page);
        debug!("Created activity page {}", created.id);
        Ok(created)
    }

    async fn get_activities(&self) -> Result<Vec<Activity>> {
        let mut activities = Vec::new();
        let mut start_cursor: Option<String> = None;

        loop {
            let request = QueryDatabaseRequest {
                sorts: self.sorts(),
                start_cursor: start_cursor.take(),
                page_size: MAX_PAGE_SIZE,
            };
            let response = self
                .api
                .query_database(&self.database_id, &request)
                .await
                .inspect_err(|e| error!("Error querying activity pages: {}", e))?;

            activities.extend(
                response
                    .results
                    .iter()
                    .map(|page| decode_page(&self.schema, page)),
            );

            match response.next_cursor {
                Some(cursor) if response.has_more => start_cursor = Some(cursor),
                _ => break,
            }
        }

        debug!("Fetched {} activity pages", activities.len());
        Ok(activities)
    }

    async fn archive_activity(&self, activity_id: &str) -> Result<()> {
        self.api
            .update_page(activity_id, &UpdatePageRequest { archived: true })
            .await
            .inspect_err(|e| error!("Error archiving activity page {}: {}", activity_id, e))?;
        Ok(())
    }
}
