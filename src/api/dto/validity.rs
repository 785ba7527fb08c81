//! DTOs for the insurance validity check.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query string of `GET /api/cars/{carId}/insurance-valid`.
///
/// `date` stays raw text so that parse failures produce a 400 with a format
/// hint rather than a generic query rejection.
#[derive(Debug, Deserialize)]
pub struct ValidityQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceValidityResponse {
    pub car_id: i64,
    pub date: NaiveDate,
    pub valid: bool,
}
