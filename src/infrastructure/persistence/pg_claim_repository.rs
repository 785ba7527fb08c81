//! PostgreSQL implementation of claim repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Claim, NewClaim};
use crate::domain::repositories::ClaimRepository;
use crate::error::AppError;

/// PostgreSQL repository for claims.
pub struct PgClaimRepository {
    pool: Arc<PgPool>,
}

impl PgClaimRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ClaimRow {
    id: i64,
    car_id: i64,
    claim_date: NaiveDate,
    description: String,
    amount: Decimal,
}

impl From<ClaimRow> for Claim {
    fn from(r: ClaimRow) -> Self {
        Claim::new(r.id, r.car_id, r.claim_date, r.description, r.amount)
    }
}

#[async_trait]
impl ClaimRepository for PgClaimRepository {
    async fn save(&self, new_claim: NewClaim) -> Result<Claim, AppError> {
        let row = sqlx::query_as::<_, ClaimRow>(
            r#"
            INSERT INTO claims (car_id, claim_date, description, amount)
            VALUES ($1, $2, $3, $4)
            RETURNING id, car_id, claim_date, description, amount
            "#,
        )
        .bind(new_claim.car_id)
        .bind(new_claim.claim_date)
        .bind(new_claim.description)
        .bind(new_claim.amount)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_car_id(&self, car_id: i64) -> Result<Vec<Claim>, AppError> {
        let rows = sqlx::query_as::<_, ClaimRow>(
            r#"
            SELECT id, car_id, claim_date, description, amount
            FROM claims
            WHERE car_id = $1
            ORDER BY id
            "#,
        )
        .bind(car_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Claim::from).collect())
    }
}
