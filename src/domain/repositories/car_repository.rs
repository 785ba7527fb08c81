//! Repository trait for car lookups.

use crate::domain::entities::Car;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to cars.
///
/// Cars are owned externally; this service never creates or updates them.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCarRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Lists all cars with their owners, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Car>, AppError>;

    /// Finds a car by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Car))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError>;
}
