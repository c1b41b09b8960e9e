#![allow(dead_code)]

use greenspace_storage::domain::mutation;
use greenspace_storage::infra::storage::migrations::Migrator;
use greenspace_storage::{Image, Region, Repositories, Sensor, SensorStatus, Store};
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use std::time::Duration;

/// Fresh in-memory database with the full schema applied. The pool is capped
/// at one connection so every query sees the same SQLite instance.
pub async fn setup() -> (Store, Repositories) {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let db = Database::connect(options).await.expect("in-memory database");
    Migrator::up(&db, None).await.expect("migrations");

    let store = Store::new(Arc::new(db));
    let repos = Repositories::new(store.clone());
    (store, repos)
}

pub async fn create_region(repos: &Repositories, name: &str) -> Region {
    repos
        .region
        .create(vec![mutation::region::with_name(name)])
        .await
        .expect("create region")
}

pub async fn create_sensor(repos: &Repositories, status: SensorStatus) -> Sensor {
    repos
        .sensor
        .create(vec![mutation::sensor::with_status(status)])
        .await
        .expect("create sensor")
}

pub async fn create_image(repos: &Repositories, url: &str) -> Image {
    repos
        .image
        .create(vec![mutation::image::with_url(url)])
        .await
        .expect("create image")
}
