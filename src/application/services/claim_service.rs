//! Claim registration.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::entities::{Claim, NewClaim};
use crate::domain::repositories::{CarRepository, ClaimRepository};
use crate::error::AppError;

/// Service for registering claims against cars.
///
/// Positive amount and non-blank description are checked at the HTTP
/// boundary. Duplicate claims are not detected.
pub struct ClaimService {
    claim_repository: Arc<dyn ClaimRepository>,
    car_repository: Arc<dyn CarRepository>,
}

impl ClaimService {
    /// Creates a new claim service.
    pub fn new(
        claim_repository: Arc<dyn ClaimRepository>,
        car_repository: Arc<dyn CarRepository>,
    ) -> Self {
        Self {
            claim_repository,
            car_repository,
        }
    }

    /// Registers a claim for an existing car.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the car does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_claim(
        &self,
        car_id: i64,
        claim_date: NaiveDate,
        description: String,
        amount: Decimal,
    ) -> Result<Claim, AppError> {
        if self.car_repository.find_by_id(car_id).await?.is_none() {
            return Err(AppError::car_not_found(car_id));
        }

        let claim = self
            .claim_repository
            .save(NewClaim {
                car_id,
                claim_date,
                description,
                amount,
            })
            .await?;

        tracing::info!(claim_id = claim.id, car_id, amount = %claim.amount, "Claim registered");

        Ok(claim)
    }
}
