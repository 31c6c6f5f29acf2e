//! CLI command implementations.

pub mod admin;
pub mod migrate;
pub mod seed;

/// Resolve the database URL the same way the site does.
pub(crate) fn database_url() -> String {
    let _ = dotenvy::dotenv();
    std::env::var("SITE_DATABASE_URL").unwrap_or_else(|_| "sqlite:millbrook.db".to_string())
}
