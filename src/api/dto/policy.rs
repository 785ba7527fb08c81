//! DTOs for insurance policy creation.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use validator::{Validate, ValidationError};

use crate::error::AppError;

/// Request body for `POST /api/cars/{carId}/create-insurance`.
///
/// Every field is optional at the serde level so that a missing field is
/// reported by validation with its own message instead of a parse error.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePolicyRequest {
    #[validate(
        required(message = "Provider is required"),
        custom(function = "provider_not_blank")
    )]
    pub provider: Option<String>,

    #[validate(required(message = "Start date is required"))]
    pub start_date: Option<NaiveDate>,

    #[validate(required(message = "End date is required"))]
    pub end_date: Option<NaiveDate>,
}

fn provider_not_blank(provider: &str) -> Result<(), ValidationError> {
    if provider.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Provider is required".into()));
    }
    Ok(())
}

/// Validated policy fields.
#[derive(Debug)]
pub struct PolicyInput {
    pub provider: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl CreatePolicyRequest {
    /// Unwraps the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is missing. Callers run
    /// [`Validate::validate`] first, so this only fires if that step was skipped.
    pub fn into_input(self) -> Result<PolicyInput, AppError> {
        match (self.provider, self.start_date, self.end_date) {
            (Some(provider), Some(start_date), Some(end_date)) => Ok(PolicyInput {
                provider,
                start_date,
                end_date,
            }),
            _ => Err(AppError::bad_request(
                "Validation failed: provider, startDate and endDate are required; ",
                json!({}),
            )),
        }
    }
}
