//! DTOs for claim registration.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use validator::{Validate, ValidationError};

use crate::error::AppError;

/// Request body for `POST /api/cars/{carId}/claims`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimRequest {
    #[validate(required(message = "Car ID is required"))]
    pub car_id: Option<i64>,

    #[validate(required(message = "Claim date is required!"))]
    pub claim_date: Option<NaiveDate>,

    #[validate(
        required(message = "Description is required"),
        custom(function = "description_not_blank")
    )]
    pub description: Option<String>,

    #[validate(
        required(message = "Amount is required!"),
        custom(function = "amount_positive")
    )]
    pub amount: Option<Decimal>,
}

fn description_not_blank(description: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Description is required".into()));
    }
    Ok(())
}

/// Largest amount the `NUMERIC(12, 2)` column holds.
const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

fn amount_positive(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() || amount.is_zero() {
        return Err(ValidationError::new("positive").with_message("Amount must be positive!".into()));
    }
    if amount.normalize().scale() > 2 {
        return Err(ValidationError::new("scale")
            .with_message("Amount must have at most 2 decimal places!".into()));
    }
    if *amount > MAX_AMOUNT {
        return Err(ValidationError::new("range")
            .with_message("Amount must not exceed 9999999999.99!".into()));
    }
    Ok(())
}

/// Validated claim fields.
#[derive(Debug)]
pub struct ClaimInput {
    pub car_id: i64,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

impl CreateClaimRequest {
    /// Unwraps the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is missing.
    pub fn into_input(self) -> Result<ClaimInput, AppError> {
        match (self.car_id, self.claim_date, self.description, self.amount) {
            (Some(car_id), Some(claim_date), Some(description), Some(amount)) => Ok(ClaimInput {
                car_id,
                claim_date,
                description,
                amount,
            }),
            _ => Err(AppError::bad_request(
                "Validation failed: carId, claimDate, description and amount are required; ",
                json!({}),
            )),
        }
    }
}
