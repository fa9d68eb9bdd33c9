use async_trait::async_trait;
use futures::future::join_all;
use log::{debug, error, warn};
use std::sync::Arc;

use crate::activities::activities_constants::is_known_category;
use crate::activities::activities_errors::{ActivityError, ArchiveFailure};
use crate::activities::activities_model::*;
use crate::activities::{ActivityRepositoryTrait, ActivityServiceTrait};
use crate::Result;

/// Service for managing activities
pub struct ActivityService {
    activity_repository: Arc<dyn ActivityRepositoryTrait>,
}

impl ActivityService {
    /// Creates a new ActivityService instance with injected dependencies
    pub fn new(activity_repository: Arc<dyn ActivityRepositoryTrait>) -> Self {
        Self {
            activity_repository,
        }
    }
}

#[async_trait]
impl ActivityServiceTrait for ActivityService {
    async fn create_activity(&self, new_activity: NewActivity) -> Result<Activity> {
        new_activity.validate()?;

        // Categories are not restricted server side; flag drift for the logs.
        if !is_known_category(&new_activity.category) {
            warn!(
                "Creating activity with unrecognised category '{}'",
                new_activity.category
            );
        }

        self.activity_repository
            .create_activity(new_activity)
            .await
            .inspect_err(|e| error!("Error creating activity: {}", e))
    }

    async fn get_activities(&self) -> Result<Vec<Activity>> {
        let mut activities = self
            .activity_repository
            .get_activities()
            .await
            .inspect_err(|e| error!("Error fetching activities: {}", e))?;
        sort_activities(&mut activities);
        Ok(activities)
    }

    async fn get_activities_by_category(&self, category: &str) -> Result<Vec<Activity>> {
        let activities = self.get_activities().await?;
        Ok(activities
            .into_iter()
            .filter(|a| a.category == category)
            .collect())
    }

    async fn get_activity_summary(&self) -> Result<ActivitySummary> {
        let activities = self.get_activities().await?;
        Ok(ActivitySummary::from_activities(&activities))
    }

    async fn delete_activity(&self, activity_id: &str) -> Result<()> {
        self.activity_repository
            .archive_activity(activity_id)
            .await
            .inspect_err(|e| error!("Error deleting activity {}: {}", activity_id, e))
    }

    async fn clear_all_activities(&self) -> Result<ClearAllResult> {
        let activities = self
            .get_activities()
            .await
            .inspect_err(|e| error!("Error clearing all activities: {}", e))?;

        if activities.is_empty() {
            debug!("No active activities to clear");
            return Ok(ClearAllResult::default());
        }

        let outcomes = join_all(activities.iter().map(|activity| async move {
            let outcome = self.activity_repository.archive_activity(&activity.id).await;
            (activity.id.clone(), outcome)
        }))
        .await;

        let mut archived = Vec::with_capacity(outcomes.len());
        let mut failed = Vec::new();
        for (id, outcome) in outcomes {
            match outcome {
                Ok(()) => archived.push(id),
                Err(e) => failed.push(ArchiveFailure {
                    id,
                    reason: e.to_string(),
                }),
            }
        }

        if failed.is_empty() {
            debug!("Archived {} activities", archived.len());
            return Ok(ClearAllResult {
                archived: archived.len(),
            });
        }

        let err = ActivityError::ClearAllIncomplete { archived, failed };
        error!("Error clearing all activities: {}", err);
        Err(err.into())
    }
}
