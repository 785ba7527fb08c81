//! PostgreSQL implementation of insurance policy repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{InsurancePolicy, NewInsurancePolicy};
use crate::domain::repositories::PolicyRepository;
use crate::error::AppError;

/// PostgreSQL repository for insurance policies.
pub struct PgPolicyRepository {
    pool: Arc<PgPool>,
}

impl PgPolicyRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PolicyRow {
    id: i64,
    car_id: i64,
    provider: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
}

impl From<PolicyRow> for InsurancePolicy {
    fn from(r: PolicyRow) -> Self {
        InsurancePolicy::new(r.id, r.car_id, r.provider, r.start_date, r.end_date)
    }
}

#[async_trait]
impl PolicyRepository for PgPolicyRepository {
    async fn save(&self, new_policy: NewInsurancePolicy) -> Result<InsurancePolicy, AppError> {
        let row = sqlx::query_as::<_, PolicyRow>(
            r#"
            INSERT INTO insurance_policies (car_id, provider, start_date, end_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, car_id, provider, start_date, end_date
            "#,
        )
        .bind(new_policy.car_id)
        .bind(new_policy.provider)
        .bind(new_policy.start_date)
        .bind(new_policy.end_date)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_car_id(&self, car_id: i64) -> Result<Vec<InsurancePolicy>, AppError> {
        let rows = sqlx::query_as::<_, PolicyRow>(
            r#"
            SELECT id, car_id, provider, start_date, end_date
            FROM insurance_policies
            WHERE car_id = $1
            ORDER BY id
            "#,
        )
        .bind(car_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(InsurancePolicy::from).collect())
    }

    async fn find_expired_before(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<InsurancePolicy>, AppError> {
        // NULL end_date never satisfies the comparison
        let rows = sqlx::query_as::<_, PolicyRow>(
            r#"
            SELECT id, car_id, provider, start_date, end_date
            FROM insurance_policies
            WHERE end_date < $1
            ORDER BY end_date, id
            "#,
        )
        .bind(date)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(InsurancePolicy::from).collect())
    }
}
