//! Database operations for the embedded `SQLite` store.
//!
//! # Tables
//!
//! - `products` - Catalog records managed from the admin dashboard
//! - `quotes` - Contact-form quote requests (write-only from handlers)
//! - `tower_sessions` - Session storage (managed by the session store)
//!
//! # Migrations
//!
//! Migrations live in `crates/site/migrations/` and are applied idempotently
//! at startup; `millbrook migrate` runs them standalone.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use thiserror::Error;

pub mod products;
pub mod quotes;

pub use products::ProductRepository;
pub use quotes::QuoteRepository;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// The database file is created if missing; WAL keeps reads from blocking
/// the (single) writer.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(5))
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
}

/// Apply pending migrations.
///
/// All statements are `CREATE TABLE IF NOT EXISTS`, so this is safe to run
/// on every startup.
///
/// # Errors
///
/// Returns `sqlx::migrate::MigrateError` if a migration fails.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// In-memory pool with the schema applied.
    ///
    /// A single connection keeps every query on the same `:memory:` database.
    pub async fn memory_pool() -> SqlitePool {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("valid connection string");
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts)
            .await
            .expect("connect to in-memory database");
        run_migrations(&pool).await.expect("apply migrations");
        pool
    }
}
