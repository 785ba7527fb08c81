//! Body returned with `201 Created`.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: String,
}
