use super::activities_model::*;
use crate::Result;
use async_trait::async_trait;

/// Trait defining the contract for Activity repository operations.
///
/// Implementations talk to a record store that soft-deletes: archived
/// records must never be returned by `get_activities`.
#[async_trait]
pub trait ActivityRepositoryTrait: Send + Sync {
    /// Persists a new activity and returns it with its store-assigned id.
    /// The amount is coerced with `coerce_amount` and a missing note is stored empty.
    async fn create_activity(&self, new_activity: NewActivity) -> Result<Activity>;

    /// Returns every active activity, ordered by date then time, both descending.
    async fn get_activities(&self) -> Result<Vec<Activity>>;

    /// Marks the activity archived. Fails with `StoreError::NotFound` for unknown ids.
    async fn archive_activity(&self, activity_id: &str) -> Result<()>;
}

/// Trait defining the contract for Activity service operations.
#[async_trait]
pub trait ActivityServiceTrait: Send + Sync {
    async fn create_activity(&self, new_activity: NewActivity) -> Result<Activity>;
    async fn get_activities(&self) -> Result<Vec<Activity>>;
    async fn get_activities_by_category(&self, category: &str) -> Result<Vec<Activity>>;
    async fn get_activity_summary(&self) -> Result<ActivitySummary>;
    async fn delete_activity(&self, activity_id: &str) -> Result<()>;
    /// Archives every active activity concurrently. Not atomic: on failure the
    /// records already archived stay archived and the error lists both sets.
    async fn clear_all_activities(&self) -> Result<ClearAllResult>;
}
