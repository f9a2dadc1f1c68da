use std::sync::Arc;

use anyhow::Result;
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::config::{Config, StoreBackend};

pub mod memory;
pub mod models;
pub mod postgres;
pub mod repositories;
pub mod store;
pub mod utils;

pub use memory::{MemoryCharterStore, Seed};
pub use postgres::PgCharterStore;
pub use store::{CharterStore, StoreError};

pub async fn init_database(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    log::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    log::info!("Migrations completed successfully");

    Ok(pool)
}

/// Builds the store selected by `STORE_BACKEND`.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn CharterStore>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let pool = init_database(&config.database_url).await?;
            Ok(Arc::new(PgCharterStore::new(pool)))
        }
        StoreBackend::Memory => {
            let seed = match &config.seed_file {
                Some(path) => Seed::from_file(path)?,
                None => Seed::default(),
            };
            log::warn!(
                "Using in-memory store ({} bookings, {} staff); data is lost on restart",
                seed.bookings.len(),
                seed.staff.len()
            );
            Ok(Arc::new(MemoryCharterStore::from_seed(seed)))
        }
    }
}
