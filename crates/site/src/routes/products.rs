//! Public product listing route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::db::ProductRepository;
use crate::error::Result;
use crate::filters;
use crate::models::Product;
use crate::state::AppState;

/// Public product listing template.
#[derive(Template, WebTemplate)]
#[template(path = "products.html")]
pub struct ProductsTemplate {
    pub products: Vec<Product>,
}

/// List the whole catalog, unfiltered.
///
/// GET /products
///
/// # Errors
///
/// Returns `AppError::Database` if the listing query fails.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<ProductsTemplate> {
    let products = ProductRepository::new(state.pool()).list_all().await?;
    Ok(ProductsTemplate { products })
}
