//! DTOs for car history.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{HistoryEvent, HistoryEventKind};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEventItem {
    #[serde(rename = "type")]
    pub kind: HistoryEventKind,
    pub date: NaiveDate,
    pub description: String,
    pub source_id: i64,
}

impl From<HistoryEvent> for HistoryEventItem {
    fn from(e: HistoryEvent) -> Self {
        Self {
            kind: e.kind,
            date: e.date,
            description: e.description,
            source_id: e.source_id,
        }
    }
}

/// Response for `GET /api/cars/{carId}/history`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarHistoryResponse {
    pub car_id: i64,
    pub events: Vec<HistoryEventItem>,
}
