//! Insurance policy entity and the validity check over a car's policies.

use chrono::NaiveDate;

/// A coverage interval for a car.
///
/// `end_date` is nullable in storage but every policy created through the API
/// carries one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsurancePolicy {
    pub id: i64,
    pub car_id: i64,
    pub provider: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl InsurancePolicy {
    /// Creates a new InsurancePolicy instance.
    pub fn new(
        id: i64,
        car_id: i64,
        provider: String,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            car_id,
            provider,
            start_date,
            end_date,
        }
    }

    /// Returns true if `date` falls within `[start_date, end_date]`.
    ///
    /// A policy without an end date covers nothing.
    pub fn covers(&self, date: NaiveDate) -> bool {
        match self.end_date {
            Some(end) => self.start_date <= date && date <= end,
            None => false,
        }
    }

    /// Returns true if the policy ended strictly before `today`.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.end_date.is_some_and(|end| end < today)
    }
}

/// Input data for persisting a new policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInsurancePolicy {
    pub car_id: i64,
    pub provider: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Returns true if at least one policy covers `date`.
pub fn is_valid_on(policies: &[InsurancePolicy], date: NaiveDate) -> bool {
    policies.iter().any(|p| p.covers(date))
}
