//! Handler for the insurance validity check.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;

use crate::api::dto::validity::{InsuranceValidityResponse, ValidityQuery};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::dates::{ensure_within_supported_range, parse_iso_date};

/// Reports whether the car has a policy covering the given date.
///
/// # Endpoint
///
/// `GET /api/cars/{carId}/insurance-valid?date=YYYY-MM-DD`
///
/// # Errors
///
/// - 404 if the car does not exist (checked first)
/// - 400 if `date` is missing or not a `YYYY-MM-DD` date
/// - 400 if `date` is more than 50 years away from today, where today is
///   taken in the configured `EXPIRY_UTC_OFFSET_HOURS`
pub async fn insurance_validity_handler(
    State(state): State<AppState>,
    Path(car_id): Path<i64>,
    Query(params): Query<ValidityQuery>,
) -> Result<Json<InsuranceValidityResponse>, AppError> {
    state.car_service.get_car(car_id).await?;

    let raw = params.date.ok_or_else(|| {
        AppError::bad_request(
            "Invalid date format. Please use YYYY-MM-DD format: date parameter is missing",
            json!({ "expected_format": "YYYY-MM-DD" }),
        )
    })?;

    let date = parse_iso_date(&raw)?;
    let date = ensure_within_supported_range(date, state.today())?;

    let valid = state.car_service.is_insurance_valid(car_id, date).await?;

    Ok(Json(InsuranceValidityResponse { car_id, date, valid }))
}
