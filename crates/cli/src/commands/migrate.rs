//! Database migration command.
//!
//! The site also applies migrations at startup; this command exists for
//! preparing a database ahead of a deploy and for CI.

use millbrook_site::db;

/// Apply pending migrations to the site database.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or a migration fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let url = super::database_url();

    tracing::info!("Connecting to {url}");
    let pool = db::create_pool(&url).await?;

    tracing::info!("Running migrations...");
    db::run_migrations(&pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}
