//! Product repository.
//!
//! All queries are parameterized; the catalog listing composes its optional
//! predicates from a [`CatalogFilter`] using the `($n IS NULL OR ...)` form,
//! so user input never becomes SQL text.

use sqlx::SqlitePool;
use tracing::instrument;

use millbrook_core::ProductId;

use super::RepositoryError;
use crate::models::catalog::{CatalogFilter, CatalogPage, PER_PAGE, clamp_page, total_pages};
use crate::models::product::{NewProduct, Product, ProductUpdate};

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List the whole catalog in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, category, description, image
            FROM products
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Fetch one page of the filtered catalog plus the total match count.
    ///
    /// The requested page is clamped into the valid range, so out-of-range
    /// values land on the nearest real page instead of producing a negative
    /// offset or an empty tail. Count and fetch are two autocommit
    /// statements; a write between them can skew `total` against the page
    /// contents, which is accepted for this catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    #[instrument(skip(self))]
    pub async fn page(&self, filter: &CatalogFilter) -> Result<CatalogPage, RepositoryError> {
        let total: i64 = sqlx::query_scalar(
            r"
            SELECT COUNT(*)
            FROM products
            WHERE ($1 IS NULL OR name LIKE '%' || $1 || '%')
              AND ($2 IS NULL OR category = $2)
            ",
        )
        .bind(filter.search())
        .bind(filter.category())
        .fetch_one(self.pool)
        .await?;

        let total_pages = total_pages(total);
        let page = clamp_page(filter.requested_page(), total_pages);
        let offset = i64::from(page - 1) * PER_PAGE;

        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, category, description, image
            FROM products
            WHERE ($1 IS NULL OR name LIKE '%' || $1 || '%')
              AND ($2 IS NULL OR category = $2)
            ORDER BY id
            LIMIT $3 OFFSET $4
            ",
        )
        .bind(filter.search())
        .bind(filter.category())
        .bind(PER_PAGE)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;

        Ok(CatalogPage {
            products,
            total,
            page,
            total_pages,
        })
    }

    /// Distinct category labels, computed by scanning the table.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn categories(&self) -> Result<Vec<String>, RepositoryError> {
        let categories = sqlx::query_scalar::<_, String>(
            r"
            SELECT DISTINCT category FROM products ORDER BY category
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, category, description, image
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Insert a new product and return its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create(&self, product: &NewProduct) -> Result<ProductId, RepositoryError> {
        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO products (name, category, description, image)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(&product.name)
        .bind(&product.category)
        .bind(&product.description)
        .bind(product.image.as_deref())
        .fetch_one(self.pool)
        .await?;

        Ok(ProductId::new(id))
    }

    /// Update a product's editable fields.
    ///
    /// The image and ID are left untouched. Updating a missing ID affects
    /// zero rows.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            UPDATE products
            SET name = $1, category = $2, description = $3
            WHERE id = $4
            ",
        )
        .bind(&update.name)
        .bind(&update.category)
        .bind(&update.description)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Delete a product by ID.
    ///
    /// Deleting a nonexistent ID is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ProductId) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM products WHERE id = $1
            ",
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
