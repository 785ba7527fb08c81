//! API route configuration.

use crate::api::handlers::{
    car_history_handler, create_policy_handler, insurance_validity_handler, list_cars_handler,
    register_claim_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All `/api` routes.
///
/// # Endpoints
///
/// - `GET  /cars`                            - List cars
/// - `POST /cars/{car_id}/create-insurance`  - Create an insurance policy
/// - `POST /cars/{car_id}/claims`            - Register a claim
/// - `GET  /cars/{car_id}/history`           - Chronological policy/claim history
/// - `GET  /cars/{car_id}/insurance-valid`   - Validity check for `?date=YYYY-MM-DD`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/cars", get(list_cars_handler))
        .route(
            "/cars/{car_id}/create-insurance",
            post(create_policy_handler),
        )
        .route("/cars/{car_id}/claims", post(register_claim_handler))
        .route("/cars/{car_id}/history", get(car_history_handler))
        .route(
            "/cars/{car_id}/insurance-valid",
            get(insurance_validity_handler),
        )
}
