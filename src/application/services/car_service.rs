//! Car lookups and the insurance validity check.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::{Car, is_valid_on};
use crate::domain::repositories::{CarRepository, PolicyRepository};
use crate::error::AppError;

/// Service for reading cars and answering "is this car insured on date X".
pub struct CarService {
    car_repository: Arc<dyn CarRepository>,
    policy_repository: Arc<dyn PolicyRepository>,
}

impl CarService {
    /// Creates a new car service.
    pub fn new(
        car_repository: Arc<dyn CarRepository>,
        policy_repository: Arc<dyn PolicyRepository>,
    ) -> Self {
        Self {
            car_repository,
            policy_repository,
        }
    }

    /// Lists all cars.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_cars(&self) -> Result<Vec<Car>, AppError> {
        self.car_repository.list().await
    }

    /// Retrieves a car by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the car does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_car(&self, car_id: i64) -> Result<Car, AppError> {
        self.car_repository
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| AppError::car_not_found(car_id))
    }

    /// Returns true if any policy of the car covers `date` (inclusive).
    ///
    /// Does not check that the car exists; an unknown car has no policies
    /// and therefore yields `false`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn is_insurance_valid(&self, car_id: i64, date: NaiveDate) -> Result<bool, AppError> {
        let policies = self.policy_repository.find_by_car_id(car_id).await?;
        Ok(is_valid_on(&policies, date))
    }
}
