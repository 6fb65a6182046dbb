//! Database connection pool initialization.
//!
//! The connection string is read from the `DATABASE_URL` environment
//! variable. The returned [`PgPool`] is cheaply cloneable and shared through
//! the application state.

use sqlx::PgPool;
use std::env;

/// Initializes the PostgreSQL connection pool.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set or the connection fails. This is
/// called once during startup; failing fast here is intentional.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
