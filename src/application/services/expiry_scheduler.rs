//! Idempotent logging of expired insurance policies.
//!
//! [`ExpiryScheduler`] owns the set of policy ids it has already reported.
//! Each [`tick`](ExpiryScheduler::tick) logs every policy that ended before
//! today and is not yet in the set, then records it, so repeated ticks never
//! announce the same policy twice until [`clear`](ExpiryScheduler::clear) is
//! called. The set lives in memory only and is lost on restart.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::repositories::PolicyRepository;
use crate::error::AppError;

pub struct ExpiryScheduler {
    policy_repository: Arc<dyn PolicyRepository>,
    /// Offset used to decide what "today" is.
    offset: FixedOffset,
    /// Held for the whole tick, which serializes concurrent triggers.
    logged_ids: Mutex<HashSet<i64>>,
}

impl ExpiryScheduler {
    /// Creates a scheduler with an empty logged-id set.
    pub fn new(policy_repository: Arc<dyn PolicyRepository>, offset: FixedOffset) -> Self {
        Self {
            policy_repository,
            offset,
            logged_ids: Mutex::new(HashSet::new()),
        }
    }

    /// Current calendar date in the scheduler's offset.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }

    /// Runs one expiry check for today.
    ///
    /// Returns the number of policies logged by this tick.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the policy query fails. The
    /// logged-id set is left untouched in that case.
    pub async fn tick(&self) -> Result<usize, AppError> {
        self.tick_on(self.today()).await
    }

    /// Runs one expiry check as if today were `today`.
    ///
    /// # Errors
    ///
    /// See [`Self::tick`].
    pub async fn tick_on(&self, today: NaiveDate) -> Result<usize, AppError> {
        let mut logged = self.logged_ids.lock().await;

        let expired = self.policy_repository.find_expired_before(today).await?;
        if expired.is_empty() {
            debug!("No expired policies found");
            return Ok(0);
        }

        debug!("Found {} expired policies to check", expired.len());

        let mut newly_logged = 0;
        for policy in expired {
            let Some(end_date) = policy.end_date else {
                continue;
            };
            if logged.insert(policy.id) {
                info!(
                    policy_id = policy.id,
                    car_id = policy.car_id,
                    end_date = %end_date,
                    "Policy {} for car {} expired on {}",
                    policy.id,
                    policy.car_id,
                    end_date
                );
                newly_logged += 1;
            }
        }

        Ok(newly_logged)
    }

    /// Forgets every logged policy id.
    pub async fn clear(&self) {
        self.logged_ids.lock().await.clear();
    }

    /// Snapshot of the policy ids logged so far.
    pub async fn logged_ids(&self) -> HashSet<i64> {
        self.logged_ids.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::InsurancePolicy;
    use crate::domain::repositories::MockPolicyRepository;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn expired_policy(id: i64, end: &str) -> InsurancePolicy {
        InsurancePolicy::new(id, 1, "Allianz".to_string(), d("2020-01-01"), Some(d(end)))
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[tokio::test]
    async fn test_tick_logs_each_policy_once() {
        let mut mock_repo = MockPolicyRepository::new();
        mock_repo
            .expect_find_expired_before()
            .withf(|date| *date == d("2025-01-01"))
            .times(2)
            .returning(|_| Ok(vec![expired_policy(1, "2024-06-30"), expired_policy(2, "2024-12-31")]));

        let scheduler = ExpiryScheduler::new(Arc::new(mock_repo), utc());

        assert_eq!(scheduler.tick_on(d("2025-01-01")).await.unwrap(), 2);
        let first_run = scheduler.logged_ids().await;

        assert_eq!(scheduler.tick_on(d("2025-01-01")).await.unwrap(), 0);
        let second_run = scheduler.logged_ids().await;

        assert_eq!(first_run, second_run);
        assert_eq!(second_run, HashSet::from([1, 2]));
    }

    #[tokio::test]
    async fn test_tick_logs_only_new_expirations() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut mock_repo = MockPolicyRepository::new();
        mock_repo.expect_find_expired_before().returning(move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(vec![expired_policy(1, "2024-06-30")])
            } else {
                Ok(vec![expired_policy(1, "2024-06-30"), expired_policy(5, "2025-01-01")])
            }
        });

        let scheduler = ExpiryScheduler::new(Arc::new(mock_repo), utc());

        assert_eq!(scheduler.tick_on(d("2025-01-01")).await.unwrap(), 1);
        assert_eq!(scheduler.tick_on(d("2025-01-02")).await.unwrap(), 1);
        assert_eq!(scheduler.logged_ids().await, HashSet::from([1, 5]));
    }

    #[tokio::test]
    async fn test_concurrent_ticks_log_each_policy_once() {
        let mut mock_repo = MockPolicyRepository::new();
        mock_repo.expect_find_expired_before().times(2).returning(|_| {
            Ok(vec![
                expired_policy(1, "2024-06-30"),
                expired_policy(2, "2024-12-31"),
                expired_policy(3, "2024-12-31"),
            ])
        });

        let scheduler = ExpiryScheduler::new(Arc::new(mock_repo), utc());

        let (first, second) = tokio::join!(
            scheduler.tick_on(d("2025-01-01")),
            scheduler.tick_on(d("2025-01-01"))
        );

        assert_eq!(first.unwrap() + second.unwrap(), 3);
        assert_eq!(scheduler.logged_ids().await, HashSet::from([1, 2, 3]));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_parallel_ticks_across_threads_log_each_policy_once() {
        let mut mock_repo = MockPolicyRepository::new();
        mock_repo
            .expect_find_expired_before()
            .times(8)
            .returning(|_| Ok((1..=20).map(|id| expired_policy(id, "2024-12-31")).collect()));

        let scheduler = Arc::new(ExpiryScheduler::new(Arc::new(mock_repo), utc()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let scheduler = scheduler.clone();
                tokio::spawn(async move { scheduler.tick_on(d("2025-01-01")).await })
            })
            .collect();

        let mut total = 0;
        for handle in handles {
            total += handle.await.unwrap().unwrap();
        }

        assert_eq!(total, 20);
        assert_eq!(scheduler.logged_ids().await.len(), 20);
    }

    #[tokio::test]
    async fn test_empty_tick_is_noop() {
        let mut mock_repo = MockPolicyRepository::new();
        mock_repo
            .expect_find_expired_before()
            .times(1)
            .returning(|_| Ok(vec![]));

        let scheduler = ExpiryScheduler::new(Arc::new(mock_repo), utc());

        assert_eq!(scheduler.tick_on(d("2025-01-01")).await.unwrap(), 0);
        assert!(scheduler.logged_ids().await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_empties_logged_ids() {
        let mut mock_repo = MockPolicyRepository::new();
        mock_repo
            .expect_find_expired_before()
            .returning(|_| Ok(vec![expired_policy(1, "2024-06-30")]));

        let scheduler = ExpiryScheduler::new(Arc::new(mock_repo), utc());

        scheduler.tick_on(d("2025-01-01")).await.unwrap();
        assert!(!scheduler.logged_ids().await.is_empty());

        scheduler.clear().await;
        assert!(scheduler.logged_ids().await.is_empty());

        // Cleared policies are announced again.
        assert_eq!(scheduler.tick_on(d("2025-01-01")).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_clear_on_fresh_scheduler() {
        let scheduler = ExpiryScheduler::new(Arc::new(MockPolicyRepository::new()), utc());
        scheduler.clear().await;
        assert!(scheduler.logged_ids().await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_tick_keeps_state() {
        let mut mock_repo = MockPolicyRepository::new();
        mock_repo
            .expect_find_expired_before()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", serde_json::json!({}))));

        let scheduler = ExpiryScheduler::new(Arc::new(mock_repo), utc());

        assert!(scheduler.tick_on(d("2025-01-01")).await.is_err());
        assert!(scheduler.logged_ids().await.is_empty());
    }

    #[tokio::test]
    async fn test_tick_uses_today_in_offset() {
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let expected_today = Utc::now().with_timezone(&offset).date_naive();

        let mut mock_repo = MockPolicyRepository::new();
        mock_repo
            .expect_find_expired_before()
            .withf(move |date| {
                // Allow for the date rolling over while the test runs.
                *date == expected_today || *date == expected_today.succ_opt().unwrap()
            })
            .times(1)
            .returning(|_| Ok(vec![]));

        let scheduler = ExpiryScheduler::new(Arc::new(mock_repo), offset);
        assert_eq!(scheduler.tick().await.unwrap(), 0);
    }
}
