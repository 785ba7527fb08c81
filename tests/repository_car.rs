mod common;

use car_insurance::domain::repositories::CarRepository;
use car_insurance::infrastructure::persistence::PgCarRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_seeded_cars(pool: PgPool) {
    let repo = PgCarRepository::new(Arc::new(pool));

    let cars = repo.list().await.unwrap();

    assert_eq!(cars.len(), 3);
    assert_eq!(cars[0].vin, "VIN12345");
    assert_eq!(cars[0].owner.as_ref().unwrap().name, "Ana Pop");
    assert_eq!(cars[2].owner.as_ref().unwrap().name, "Bogdan Ionescu");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_id(pool: PgPool) {
    let repo = PgCarRepository::new(Arc::new(pool));

    let car = repo.find_by_id(2).await.unwrap().unwrap();

    assert_eq!(car.make, "VW");
    assert_eq!(car.model, "Golf");
    assert_eq!(car.year_of_manufacture, 2021);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgCarRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(999).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_car_without_owner(pool: PgPool) {
    let id = common::create_test_car(&pool, "VINNOOWNER").await;
    let repo = PgCarRepository::new(Arc::new(pool));

    let car = repo.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(car.vin, "VINNOOWNER");
    assert!(car.owner.is_none());
}
