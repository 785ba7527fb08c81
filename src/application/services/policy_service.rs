//! Insurance policy creation.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::{InsurancePolicy, NewInsurancePolicy};
use crate::domain::repositories::{CarRepository, PolicyRepository};
use crate::error::AppError;

/// Service for attaching insurance policies to cars.
///
/// Field validation (non-blank provider, both dates present) happens at the
/// HTTP boundary. Start date after end date is accepted as-is.
pub struct PolicyService {
    policy_repository: Arc<dyn PolicyRepository>,
    car_repository: Arc<dyn CarRepository>,
}

impl PolicyService {
    /// Creates a new policy service.
    pub fn new(
        policy_repository: Arc<dyn PolicyRepository>,
        car_repository: Arc<dyn CarRepository>,
    ) -> Self {
        Self {
            policy_repository,
            car_repository,
        }
    }

    /// Creates a policy for an existing car.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the car does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_policy(
        &self,
        car_id: i64,
        provider: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<InsurancePolicy, AppError> {
        if self.car_repository.find_by_id(car_id).await?.is_none() {
            return Err(AppError::car_not_found(car_id));
        }

        let policy = self
            .policy_repository
            .save(NewInsurancePolicy {
                car_id,
                provider,
                start_date,
                end_date,
            })
            .await?;

        tracing::info!(
            policy_id = policy.id,
            car_id,
            "Insurance policy created with {}",
            policy.provider
        );

        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Car;
    use crate::domain::repositories::{MockCarRepository, MockPolicyRepository};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn car_repo_with(car_id: Option<i64>) -> MockCarRepository {
        let mut mock = MockCarRepository::new();
        mock.expect_find_by_id().times(1).returning(move |id| {
            Ok(car_id.filter(|known| *known == id).map(|id| {
                Car::new(
                    id,
                    "VIN12345".to_string(),
                    "Dacia".to_string(),
                    "Logan".to_string(),
                    2018,
                    None,
                )
            }))
        });
        mock
    }

    #[tokio::test]
    async fn test_create_policy_success() {
        let mut mock_policy_repo = MockPolicyRepository::new();
        mock_policy_repo
            .expect_save()
            .withf(|p| {
                p.car_id == 1
                    && p.provider == "Euroins"
                    && p.start_date == d("2023-07-07")
                    && p.end_date == d("2024-07-07")
            })
            .times(1)
            .returning(|p| {
                Ok(InsurancePolicy::new(
                    42,
                    p.car_id,
                    p.provider,
                    p.start_date,
                    Some(p.end_date),
                ))
            });

        let service = PolicyService::new(Arc::new(mock_policy_repo), Arc::new(car_repo_with(Some(1))));

        let policy = service
            .create_policy(1, "Euroins".to_string(), d("2023-07-07"), d("2024-07-07"))
            .await
            .unwrap();

        assert_eq!(policy.id, 42);
        assert_eq!(policy.end_date, Some(d("2024-07-07")));
    }

    #[tokio::test]
    async fn test_create_policy_unknown_car() {
        let mut mock_policy_repo = MockPolicyRepository::new();
        mock_policy_repo.expect_save().times(0);

        let service = PolicyService::new(Arc::new(mock_policy_repo), Arc::new(car_repo_with(None)));

        let err = service
            .create_policy(999, "Euroins".to_string(), d("2023-07-07"), d("2024-07-07"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert!(err.to_string().contains("Car with ID 999 not found"));
    }

    #[tokio::test]
    async fn test_create_policy_accepts_inverted_dates() {
        let mut mock_policy_repo = MockPolicyRepository::new();
        mock_policy_repo.expect_save().times(1).returning(|p| {
            Ok(InsurancePolicy::new(
                1,
                p.car_id,
                p.provider,
                p.start_date,
                Some(p.end_date),
            ))
        });

        let service = PolicyService::new(Arc::new(mock_policy_repo), Arc::new(car_repo_with(Some(1))));

        let result = service
            .create_policy(1, "Allianz".to_string(), d("2025-01-01"), d("2024-01-01"))
            .await;

        assert!(result.is_ok());
    }
}
