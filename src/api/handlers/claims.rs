//! Handler for claim registration.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
};
use serde_json::json;

use crate::api::dto::claim::CreateClaimRequest;
use crate::api::dto::created::CreatedResponse;
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Registers an insurance claim for a car.
///
/// # Endpoint
///
/// `POST /api/cars/{carId}/claims`
///
/// # Request Body
///
/// ```json
/// { "carId": 1, "claimDate": "2024-03-15", "description": "Windshield damage", "amount": 450.75 }
/// ```
///
/// # Errors
///
/// Returns 400 on validation failure or when `carId` differs from the path.
/// The mismatch is checked before any lookup, so a body `carId` naming an
/// unknown car under a known path id is a 400, not a 404.
/// Returns 404 if the path car does not exist.
pub async fn register_claim_handler(
    State(state): State<AppState>,
    Path(car_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<CreateClaimRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CreatedResponse>), AppError> {
    let input = payload.into_input()?;

    if input.car_id != car_id {
        return Err(AppError::bad_request(
            format!(
                "Car ID in request body ({}) does not match car ID in path ({})",
                input.car_id, car_id
            ),
            json!({ "body_car_id": input.car_id, "path_car_id": car_id }),
        ));
    }

    let claim = state
        .claim_service
        .create_claim(car_id, input.claim_date, input.description, input.amount)
        .await?;

    let location = format!("/api/cars/{}/claims/{}", car_id, claim.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CreatedResponse {
            id: claim.id,
            message: "Successfully created!".to_string(),
        }),
    ))
}
