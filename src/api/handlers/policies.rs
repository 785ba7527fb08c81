//! Handler for insurance policy creation.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
};

use crate::api::dto::created::CreatedResponse;
use crate::api::dto::policy::CreatePolicyRequest;
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates an insurance policy for a car.
///
/// # Endpoint
///
/// `POST /api/cars/{carId}/create-insurance`
///
/// # Request Body
///
/// ```json
/// { "provider": "Euroins", "startDate": "2023-07-07", "endDate": "2024-07-07" }
/// ```
///
/// # Response
///
/// `201 Created` with `Location: /api/cars/{carId}/insurance/{id}`.
///
/// # Errors
///
/// Returns 400 if a field is missing, blank or not a `YYYY-MM-DD` date.
/// Returns 404 if the car does not exist.
pub async fn create_policy_handler(
    State(state): State<AppState>,
    Path(car_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<CreatePolicyRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CreatedResponse>), AppError> {
    let input = payload.into_input()?;

    let policy = state
        .policy_service
        .create_policy(car_id, input.provider, input.start_date, input.end_date)
        .await?;

    let location = format!("/api/cars/{}/insurance/{}", car_id, policy.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CreatedResponse {
            id: policy.id,
            message: "Insurance created successfully!".to_string(),
        }),
    ))
}
