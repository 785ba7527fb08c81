//! PostgreSQL implementation of car repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Car, Owner};
use crate::domain::repositories::CarRepository;
use crate::error::AppError;

/// PostgreSQL repository for cars and their owners.
pub struct PgCarRepository {
    pool: Arc<PgPool>,
}

impl PgCarRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CarRow {
    id: i64,
    vin: String,
    make: String,
    model: String,
    year_of_manufacture: i32,
    owner_id: Option<i64>,
    owner_name: Option<String>,
    owner_email: Option<String>,
}

impl From<CarRow> for Car {
    fn from(r: CarRow) -> Self {
        let owner = match (r.owner_id, r.owner_name) {
            (Some(id), Some(name)) => Some(Owner {
                id,
                name,
                email: r.owner_email,
            }),
            _ => None,
        };
        Car::new(r.id, r.vin, r.make, r.model, r.year_of_manufacture, owner)
    }
}

const SELECT_CARS: &str = r#"
    SELECT c.id, c.vin, c.make, c.model, c.year_of_manufacture,
           o.id AS owner_id, o.name AS owner_name, o.email AS owner_email
    FROM cars c
    LEFT JOIN owners o ON o.id = c.owner_id
"#;

#[async_trait]
impl CarRepository for PgCarRepository {
    async fn list(&self) -> Result<Vec<Car>, AppError> {
        let sql = format!("{SELECT_CARS} ORDER BY c.id");
        let rows = sqlx::query_as::<_, CarRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError> {
        let sql = format!("{SELECT_CARS} WHERE c.id = $1");
        let row = sqlx::query_as::<_, CarRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Car::from))
    }
}
