//! Chronological history of a car's policies and claims.

use std::sync::Arc;

use crate::domain::entities::{HistoryEvent, build_history};
use crate::domain::repositories::{ClaimRepository, PolicyRepository};
use crate::error::AppError;

/// Service that merges a car's policies and claims into one timeline.
///
/// Car existence is the caller's concern: an unknown car yields an empty
/// history, not an error.
pub struct HistoryService {
    policy_repository: Arc<dyn PolicyRepository>,
    claim_repository: Arc<dyn ClaimRepository>,
}

impl HistoryService {
    /// Creates a new history service.
    pub fn new(
        policy_repository: Arc<dyn PolicyRepository>,
        claim_repository: Arc<dyn ClaimRepository>,
    ) -> Self {
        Self {
            policy_repository,
            claim_repository,
        }
    }

    /// Returns the car's events ordered by date ascending.
    ///
    /// See [`build_history`] for the tie-breaking rules.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn car_history(&self, car_id: i64) -> Result<Vec<HistoryEvent>, AppError> {
        let policies = self.policy_repository.find_by_car_id(car_id).await?;
        let claims = self.claim_repository.find_by_car_id(car_id).await?;

        Ok(build_history(&policies, &claims))
    }
}
