//! Storage layer - database entities, mappers, store, and repositories

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;
pub mod scalar;
pub mod store;

pub use repositories::Repositories;
pub use store::{EntityKind, Store};

use crate::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

/// Opens the shared connection pool described by `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!(max_connections = config.max_connections, "database connected");
    Ok(db)
}
