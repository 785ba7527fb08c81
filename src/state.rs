//! Shared application state injected into every handler.

use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate};

use crate::application::services::{
    CarService, ClaimService, ExpiryScheduler, HistoryService, PolicyService,
};
use crate::domain::repositories::{CarRepository, ClaimRepository, PolicyRepository};

#[derive(Clone)]
pub struct AppState {
    pub car_service: Arc<CarService>,
    pub policy_service: Arc<PolicyService>,
    pub claim_service: Arc<ClaimService>,
    pub history_service: Arc<HistoryService>,
    pub expiry_scheduler: Arc<ExpiryScheduler>,
}

impl AppState {
    /// Wires every service from one set of repositories.
    ///
    /// `expiry_offset` decides which calendar day the service considers
    /// "today", for both the expiry scheduler and date range checks.
    pub fn from_repositories(
        cars: Arc<dyn CarRepository>,
        policies: Arc<dyn PolicyRepository>,
        claims: Arc<dyn ClaimRepository>,
        expiry_offset: FixedOffset,
    ) -> Self {
        Self {
            car_service: Arc::new(CarService::new(cars.clone(), policies.clone())),
            policy_service: Arc::new(PolicyService::new(policies.clone(), cars.clone())),
            claim_service: Arc::new(ClaimService::new(claims.clone(), cars)),
            history_service: Arc::new(HistoryService::new(policies.clone(), claims)),
            expiry_scheduler: Arc::new(ExpiryScheduler::new(policies, expiry_offset)),
        }
    }
}

impl AppState {
    /// Current calendar date in the configured offset.
    pub fn today(&self) -> NaiveDate {
        self.expiry_scheduler.today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{
        MockCarRepository, MockClaimRepository, MockPolicyRepository,
    };
    use chrono::Utc;

    #[test]
    fn test_today_follows_configured_offset() {
        for hours in [14, -12] {
            let offset = FixedOffset::east_opt(hours * 3600).unwrap();
            let state = AppState::from_repositories(
                Arc::new(MockCarRepository::new()),
                Arc::new(MockPolicyRepository::new()),
                Arc::new(MockClaimRepository::new()),
                offset,
            );

            let before = Utc::now().with_timezone(&offset).date_naive();
            let today = state.today();
            let after = Utc::now().with_timezone(&offset).date_naive();

            assert!(today == before || today == after);
            assert_eq!(today, state.expiry_scheduler.today());
        }
    }
}
