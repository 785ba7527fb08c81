//! Handler for car listing.

use axum::{Json, extract::State};

use crate::api::dto::car::CarItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all cars with their owners.
///
/// # Endpoint
///
/// `GET /api/cars`
pub async fn list_cars_handler(State(state): State<AppState>) -> Result<Json<Vec<CarItem>>, AppError> {
    let cars = state.car_service.list_cars().await?;
    Ok(Json(cars.into_iter().map(CarItem::from).collect()))
}
