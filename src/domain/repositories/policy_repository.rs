//! Repository trait for insurance policies.

use crate::domain::entities::{InsurancePolicy, NewInsurancePolicy};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Repository interface for insurance policies.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPolicyRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_policy.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PolicyRepository: Send + Sync {
    /// Persists a new policy and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the car does not exist
    /// (foreign key violation).
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, new_policy: NewInsurancePolicy) -> Result<InsurancePolicy, AppError>;

    /// Returns every policy of a car, ordered by id.
    ///
    /// An unknown car yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_car_id(&self, car_id: i64) -> Result<Vec<InsurancePolicy>, AppError>;

    /// Returns every policy whose end date is strictly before `date`.
    ///
    /// Policies without an end date are never returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_expired_before(&self, date: NaiveDate)
    -> Result<Vec<InsurancePolicy>, AppError>;
}
