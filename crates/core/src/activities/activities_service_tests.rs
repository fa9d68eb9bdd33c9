#[cfg(test)]
mod tests {
    use crate::activities::activities_model::*;
    use crate::activities::{
        ActivityError, ActivityRepositoryTrait, ActivityService, ActivityServiceTrait,
    };
    use crate::errors::{Error, Result, StoreError, ValidationError};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // --- Mock ActivityRepository ---
    #[derive(Default)]
    struct MockActivityRepository {
        records: Mutex<Vec<(Activity, bool)>>,
        failing_archive_ids: Mutex<HashSet<String>>,
        fail_queries: Mutex<bool>,
        next_id: AtomicUsize,
        create_calls: AtomicUsize,
        archive_calls: AtomicUsize,
    }

    impl MockActivityRepository {
        fn new() -> Self {
            Self::default()
        }

        fn seed(&self, date: &str, time: &str, category: &str, amount: i64) -> String {
            let id = format!("page-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
            self.records.lock().unwrap().push((
                Activity {
                    id: id.clone(),
                    date: date.to_string(),
                    time: time.to_string(),
                    category: category.to_string(),
                    note: String::new(),
                    amount,
                },
                false,
            ));
            id
        }

        fn fail_archive_for(&self, id: &str) {
            self.failing_archive_ids
                .lock()
                .unwrap()
                .insert(id.to_string());
        }

        fn is_archived(&self, id: &str) -> bool {
            self.records
                .lock()
                .unwrap()
                .iter()
                .any(|(a, archived)| a.id == id && *archived)
        }
    }

    #[async_trait]
    impl ActivityRepositoryTrait for MockActivityRepository {
        async fn create_activity(&self, new_activity: NewActivity) -> Result<Activity> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            let id = format!("page-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
            let activity = Activity {
                id,
                note: new_activity.note_or_default().to_string(),
                amount: new_activity.coerced_amount(),
                date: new_activity.date,
                time: new_activity.time,
                category: new_activity.category,
            };
            self.records
                .lock()
                .unwrap()
                .push((activity.clone(), false));
            Ok(activity)
        }

        async fn get_activities(&self) -> Result<Vec<Activity>> {
            if *self.fail_queries.lock().unwrap() {
                return Err(StoreError::Unavailable("query failed".to_string()).into());
            }
            // Deliberately unsorted: the service owns the final ordering.
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .filter(|(_, archived)| !archived)
                .map(|(a, _)| a.clone())
                .collect())
        }

        async fn archive_activity(&self, activity_id: &str) -> Result<()> {
            self.archive_calls.fetch_add(1, Ordering::SeqCst);
            if self.failing_archive_ids.lock().unwrap().contains(activity_id) {
                return Err(StoreError::Unavailable(format!("archive {}", activity_id)).into());
            }
            let mut records = self.records.lock().unwrap();
            match records.iter_mut().find(|(a, _)| a.id == activity_id) {
                Some((_, archived)) => {
                    *archived = true;
                    Ok(())
                }
                None => Err(StoreError::NotFound(activity_id.to_string()).into()),
            }
        }
    }

    fn setup() -> (Arc<MockActivityRepository>, ActivityService) {
        let repo = Arc::new(MockActivityRepository::new());
        let service = ActivityService::new(repo.clone());
        (repo, service)
    }

    fn fee_entry() -> NewActivity {
        NewActivity {
            date: "2024-01-15".to_string(),
            time: "09:30".to_string(),
            category: "Fee".to_string(),
            note: Some(String::new()),
            amount: Some("50".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_then_list_round_trips_fields() {
        let (_repo, service) = setup();

        let created = service.create_activity(fee_entry()).await.unwrap();
        let listed = service.get_activities().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);
        assert_eq!(listed[0].amount, 50);
        assert_eq!(listed[0].category, "Fee");
        assert_eq!(listed[0].note, "");
    }

    #[tokio::test]
    async fn test_create_with_missing_date_never_reaches_repository() {
        let (repo, service) = setup();
        let input = NewActivity {
            date: String::new(),
            ..fee_entry()
        };

        let err = service.create_activity(input).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(ref f)) if f == "date"
        ));
        assert_eq!(repo.create_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_create_accepts_unrecognised_category() {
        let (_repo, service) = setup();
        let input = NewActivity {
            category: "Staking".to_string(),
            ..fee_entry()
        };

        let created = service.create_activity(input).await.unwrap();
        assert_eq!(created.category, "Staking");
    }

    #[tokio::test]
    async fn test_get_activities_orders_by_date_then_time_descending() {
        let (repo, service) = setup();
        let oldest = repo.seed("2024-01-01", "12:00", "Fee", 1);
        let newest = repo.seed("2024-02-01", "08:00", "Fee", 1);
        let same_day_late = repo.seed("2024-01-20", "18:00", "Fee", 1);
        let same_day_early = repo.seed("2024-01-20", "07:15", "Fee", 1);

        let ids: Vec<String> = service
            .get_activities()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();

        assert_eq!(ids, vec![newest, same_day_late, same_day_early, oldest]);
    }

    #[tokio::test]
    async fn test_delete_removes_from_listing() {
        let (repo, service) = setup();
        let keep = repo.seed("2024-01-15", "09:30", "Fee", 50);
        let drop = repo.seed("2024-01-15", "10:30", "Fee", 20);

        service.delete_activity(&drop).await.unwrap();

        let listed = service.get_activities().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, keep);
        assert!(repo.is_archived(&drop));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let (_repo, service) = setup();
        let err = service.delete_activity("missing").await.unwrap_err();
        assert!(matches!(err, Error::Store(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_clear_all_on_empty_store_makes_no_calls() {
        let (repo, service) = setup();

        let result = service.clear_all_activities().await.unwrap();

        assert_eq!(result.archived, 0);
        assert_eq!(repo.archive_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_clear_all_archives_every_active_activity() {
        let (repo, service) = setup();
        for hour in 0..5 {
            repo.seed("2024-01-15", &format!("{:02}:00", hour), "Fee", 10);
        }

        let result = service.clear_all_activities().await.unwrap();

        assert_eq!(result.archived, 5);
        assert!(service.get_activities().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_all_partial_failure_reports_both_sets() {
        let (repo, service) = setup();
        let first = repo.seed("2024-01-15", "09:00", "Fee", 10);
        let stuck = repo.seed("2024-01-15", "10:00", "Fee", 10);
        let third = repo.seed("2024-01-15", "11:00", "Fee", 10);
        repo.fail_archive_for(&stuck);

        let err = service.clear_all_activities().await.unwrap_err();

        match err {
            Error::Activity(ActivityError::ClearAllIncomplete { archived, failed }) => {
                let mut archived = archived;
                archived.sort();
                let mut expected = vec![first.clone(), third.clone()];
                expected.sort();
                assert_eq!(archived, expected);
                assert_eq!(failed.len(), 1);
                assert_eq!(failed[0].id, stuck);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        // No rollback: the successful archives stand.
        assert!(repo.is_archived(&first));
        assert!(repo.is_archived(&third));
        let remaining = service.get_activities().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, stuck);
    }

    #[tokio::test]
    async fn test_clear_all_propagates_listing_failure() {
        let (repo, service) = setup();
        repo.seed("2024-01-15", "09:00", "Fee", 10);
        *repo.fail_queries.lock().unwrap() = true;

        let err = service.clear_all_activities().await.unwrap_err();

        assert!(matches!(err, Error::Store(StoreError::Unavailable(_))));
        assert_eq!(repo.archive_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_filter_by_category() {
        let (repo, service) = setup();
        repo.seed("2024-01-15", "09:00", "Fee", 10);
        repo.seed("2024-01-15", "10:00", "Cair AirDrop", 500);
        repo.seed("2024-01-16", "10:00", "Fee", 15);

        let fees = service.get_activities_by_category("Fee").await.unwrap();

        assert_eq!(fees.len(), 2);
        assert!(fees.iter().all(|a| a.category == "Fee"));
        assert_eq!(fees[0].date, "2024-01-16");
    }

    #[tokio::test]
    async fn test_summary_over_active_activities() {
        let (repo, service) = setup();
        repo.seed("2024-01-15", "09:00", "Fee", 10);
        let archived = repo.seed("2024-01-15", "10:00", "Fee", 999);
        repo.seed("2024-01-15", "11:00", "Competitive Trading", 200);
        service.delete_activity(&archived).await.unwrap();

        let summary = service.get_activity_summary().await.unwrap();

        assert_eq!(summary.total_count, 2);
        assert_eq!(summary.total_amount, 210);
        assert_eq!(summary.categories.len(), 2);
    }
}
