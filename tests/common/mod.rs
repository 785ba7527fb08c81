#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use car_insurance::domain::entities::{
    Car, Claim, InsurancePolicy, NewClaim, NewInsurancePolicy, Owner,
};
use car_insurance::domain::repositories::{CarRepository, ClaimRepository, PolicyRepository};
use car_insurance::error::AppError;
use car_insurance::routes::router;
use car_insurance::state::AppState;
use chrono::{FixedOffset, NaiveDate};
use rust_decimal_macros::dec;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// In-memory stand-in for the three PostgreSQL repositories.
///
/// Seeded with the same rows as `migrations/*_seed.sql`.
#[derive(Default)]
pub struct InMemoryStore {
    cars: Mutex<Vec<Car>>,
    policies: Mutex<Vec<InsurancePolicy>>,
    claims: Mutex<Vec<Claim>>,
}

impl InMemoryStore {
    pub fn seeded() -> Self {
        let ana = Owner {
            id: 1,
            name: "Ana Pop".to_string(),
            email: Some("ana.pop@example.com".to_string()),
        };
        let bogdan = Owner {
            id: 2,
            name: "Bogdan Ionescu".to_string(),
            email: Some("bogdan.ionescu@example.com".to_string()),
        };

        let cars = vec![
            car(1, "VIN12345", "Dacia", "Logan", 2018, Some(ana.clone())),
            car(2, "VIN67890", "VW", "Golf", 2021, Some(ana)),
            car(3, "VINAAAAA", "Skoda", "Octavia", 2017, Some(bogdan)),
        ];

        let policies = vec![
            policy(1, 1, "Allianz", "2024-01-01", Some("2024-12-31")),
            policy(2, 1, "Groupama", "2025-01-01", Some("2025-12-31")),
            policy(3, 2, "Allianz", "2025-03-01", Some("2025-09-30")),
        ];

        let claims = vec![Claim::new(
            1,
            1,
            d("2024-05-10"),
            "Rear bumper scratch".to_string(),
            dec!(320.00),
        )];

        Self {
            cars: Mutex::new(cars),
            policies: Mutex::new(policies),
            claims: Mutex::new(claims),
        }
    }

    pub fn insert_policy(&self, car_id: i64, provider: &str, start: &str, end: Option<&str>) -> i64 {
        let mut policies = self.policies.lock().unwrap();
        let id = policies.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        policies.push(policy(id, car_id, provider, start, end));
        id
    }

    pub fn policies(&self) -> Vec<InsurancePolicy> {
        self.policies.lock().unwrap().clone()
    }

    pub fn claims(&self) -> Vec<Claim> {
        self.claims.lock().unwrap().clone()
    }
}

fn car(id: i64, vin: &str, make: &str, model: &str, year: i32, owner: Option<Owner>) -> Car {
    Car::new(
        id,
        vin.to_string(),
        make.to_string(),
        model.to_string(),
        year,
        owner,
    )
}

fn policy(id: i64, car_id: i64, provider: &str, start: &str, end: Option<&str>) -> InsurancePolicy {
    InsurancePolicy::new(id, car_id, provider.to_string(), d(start), end.map(d))
}

#[async_trait]
impl CarRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Car>, AppError> {
        Ok(self.cars.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError> {
        Ok(self.cars.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }
}

#[async_trait]
impl PolicyRepository for InMemoryStore {
    async fn save(&self, new_policy: NewInsurancePolicy) -> Result<InsurancePolicy, AppError> {
        let mut policies = self.policies.lock().unwrap();
        let id = policies.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let saved = InsurancePolicy::new(
            id,
            new_policy.car_id,
            new_policy.provider,
            new_policy.start_date,
            Some(new_policy.end_date),
        );
        policies.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_car_id(&self, car_id: i64) -> Result<Vec<InsurancePolicy>, AppError> {
        Ok(self
            .policies
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.car_id == car_id)
            .cloned()
            .collect())
    }

    async fn find_expired_before(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<InsurancePolicy>, AppError> {
        Ok(self
            .policies
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_expired_on(date))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ClaimRepository for InMemoryStore {
    async fn save(&self, new_claim: NewClaim) -> Result<Claim, AppError> {
        let mut claims = self.claims.lock().unwrap();
        let id = claims.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let saved = Claim::new(
            id,
            new_claim.car_id,
            new_claim.claim_date,
            new_claim.description,
            new_claim.amount,
        );
        claims.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_car_id(&self, car_id: i64) -> Result<Vec<Claim>, AppError> {
        Ok(self
            .claims
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.car_id == car_id)
            .cloned()
            .collect())
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::seeded());
    let state = AppState::from_repositories(
        store.clone(),
        store.clone(),
        store.clone(),
        FixedOffset::east_opt(0).unwrap(),
    );
    (state, store)
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryStore>) {
    let (state, store) = create_test_state();
    let server = TestServer::new(router(state)).unwrap();
    (server, store)
}

pub async fn create_test_car(pool: &PgPool, vin: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO cars (vin, make, model, year_of_manufacture) VALUES ($1, 'Test', 'Car', 2020) RETURNING id",
    )
    .bind(vin)
    .fetch_one(pool)
    .await
    .unwrap()
}
