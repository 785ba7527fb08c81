//! Application error type and its HTTP mapping.
//!
//! Every fallible service and repository call returns [`AppError`]. Handlers
//! propagate it with `?` and axum renders it through [`IntoResponse`] as
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Car with ID 999 not found", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload embedded in every error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed input. Rendered as 400.
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// A referenced entity does not exist. Rendered as 404.
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// Anything unexpected. Rendered as 500 with the message embedded.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Not-found error for a car id that does not resolve.
    pub fn car_not_found(car_id: i64) -> Self {
        Self::not_found(
            format!("Car with ID {} not found", car_id),
            json!({ "car_id": car_id }),
        )
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_foreign_key_violation() {
                return AppError::bad_request(
                    "Referenced entity does not exist",
                    json!({ "constraint": db.constraint() }),
                );
            }
            if db.is_check_violation() {
                return AppError::bad_request(
                    "Value rejected by database constraint",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        AppError::internal(format!("Database error: {}", e), json!({}))
    }
}

/// Joins field messages into `Validation failed: <msg>; <msg>; `.
///
/// Fields are visited in name order so the message is stable across runs.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let mut message = String::from("Validation failed: ");
        let mut details = serde_json::Map::new();

        for (field, field_errors) in fields {
            let messages: Vec<String> = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
                .collect();

            for m in &messages {
                message.push_str(m);
                message.push_str("; ");
            }
            details.insert(field.to_string(), json!(messages));
        }

        AppError::bad_request(message, json!({ "fields": details }))
    }
}
