//! Database module
//!
//! This module handles database connections, migrations, and mappers.

pub mod connection;
pub mod mappers;

use sqlx::PgPool;

pub use connection::*;
pub use mappers::Mappers;

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
