//! Quote repository.
//!
//! The contact form inserts quote requests; no handler reads them back, so
//! this repository only writes.

use sqlx::SqlitePool;
use tracing::instrument;

use millbrook_core::QuoteId;

use super::RepositoryError;
use crate::models::quote::NewQuote;

/// Repository for quote database operations.
pub struct QuoteRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> QuoteRepository<'a> {
    /// Create a new quote repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a quote request.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, quote), fields(email = %quote.email))]
    pub async fn create(&self, quote: &NewQuote) -> Result<QuoteId, RepositoryError> {
        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO quotes (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id
            ",
        )
        .bind(&quote.name)
        .bind(&quote.email)
        .bind(&quote.message)
        .fetch_one(self.pool)
        .await?;

        Ok(QuoteId::new(id))
    }
}
