//! Claim entity: a monetary incident recorded against a car.

use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub id: i64,
    pub car_id: i64,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

impl Claim {
    /// Creates a new Claim instance.
    pub fn new(
        id: i64,
        car_id: i64,
        claim_date: NaiveDate,
        description: String,
        amount: Decimal,
    ) -> Self {
        Self {
            id,
            car_id,
            claim_date,
            description,
            amount,
        }
    }
}

/// Input data for persisting a new claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClaim {
    pub car_id: i64,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}
