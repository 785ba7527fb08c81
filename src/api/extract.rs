//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// JSON body that is deserialized and then validated.
///
/// Both malformed JSON (including unparsable dates) and failed validation
/// are rejected with [`AppError::Validation`], i.e. `400 Bad Request`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::bad_request(
                    format!("Invalid request body: {}", rejection.body_text()),
                    json!({ "hint": "Dates must be formatted like \"2007-12-03\"" }),
                )
            })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
