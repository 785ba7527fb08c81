//! Repository trait for claims.

use crate::domain::entities::{Claim, NewClaim};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for claims.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClaimRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClaimRepository: Send + Sync {
    /// Persists a new claim and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the car does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, new_claim: NewClaim) -> Result<Claim, AppError>;

    /// Returns every claim of a car, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_car_id(&self, car_id: i64) -> Result<Vec<Claim>, AppError>;
}
