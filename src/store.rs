//! Connection pool construction and store round-trip checks.
//! The pool is built once by the server bootstrap and handed to repositories.

use crate::config::AppConfig;
use crate::error::AppError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub async fn connect(config: &AppConfig) -> Result<PgPool, AppError> {
    tracing::info!(
        max_connections = config.db_max_connections,
        acquire_timeout_secs = config.db_acquire_timeout_secs,
        "connecting to database"
    );
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout())
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

pub async fn ping(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
