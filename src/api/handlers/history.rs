//! Handler for car history.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::history::{CarHistoryResponse, HistoryEventItem};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the car's policies and claims as one chronological event list.
///
/// # Endpoint
///
/// `GET /api/cars/{carId}/history`
///
/// # Response
///
/// ```json
/// {
///   "carId": 1,
///   "events": [
///     { "type": "INSURANCE_POLICY", "date": "2024-01-01", "description": "Insurance policy started with Allianz", "sourceId": 1 },
///     { "type": "CLAIM", "date": "2024-05-10", "description": "Rear bumper scratch - Amount: $320.00", "sourceId": 1 }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 if the car does not exist.
pub async fn car_history_handler(
    State(state): State<AppState>,
    Path(car_id): Path<i64>,
) -> Result<Json<CarHistoryResponse>, AppError> {
    state.car_service.get_car(car_id).await?;

    let events = state.history_service.car_history(car_id).await?;

    Ok(Json(CarHistoryResponse {
        car_id,
        events: events.into_iter().map(HistoryEventItem::from).collect(),
    }))
}
