//! Postgres storage for bookings: the pool, schema bootstrap, row models and
//! the [`PgBookingStore`](store::PgBookingStore) behind the core store seam.

pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

pub mod mock;

use std::time::Duration;

use eyre::{Result, WrapErr};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

/// Connects to `database_url`. Acquiring a connection gives up after five
/// seconds, which the store reports as unavailable.
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .wrap_err("Failed to connect to the bookings database")?;

    Ok(pool)
}
