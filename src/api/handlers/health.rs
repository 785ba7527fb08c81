//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database query failed
///
/// The expiry scheduler check is informational and never degrades status.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let scheduler_check = check_expiry_scheduler(&state).await;

    let healthy = db_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            expiry_scheduler: scheduler_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity by listing cars.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.car_service.list_cars().await {
        Ok(cars) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Connected, {} cars", cars.len())),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Database error: {}", e)),
        },
    }
}

async fn check_expiry_scheduler(state: &AppState) -> CheckStatus {
    let logged = state.expiry_scheduler.logged_ids().await.len();
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("{} expired policies logged", logged)),
    }
}
