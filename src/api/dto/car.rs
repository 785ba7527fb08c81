//! DTOs for car listing.

use serde::Serialize;

use crate::domain::entities::Car;

/// Flattened car summary with optional owner columns.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarItem {
    pub id: i64,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year_of_manufacture: i32,
    pub owner_id: Option<i64>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
}

impl From<Car> for CarItem {
    fn from(c: Car) -> Self {
        let (owner_id, owner_name, owner_email) = match c.owner {
            Some(o) => (Some(o.id), Some(o.name), o.email),
            None => (None, None, None),
        };

        Self {
            id: c.id,
            vin: c.vin,
            make: c.make,
            model: c.model,
            year_of_manufacture: c.year_of_manufacture,
            owner_id,
            owner_name,
            owner_email,
        }
    }
}
