//! Admin product CRUD route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Multipart, Path, State},
    response::Redirect,
};
use tracing::instrument;

use millbrook_core::ProductId;

use super::ProductForm;
use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::{NewProduct, Product, ProductUpdate};
use crate::state::AppState;

/// New product form template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/product_new.html")]
pub struct ProductNewTemplate;

/// Edit product form template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/product_edit.html")]
pub struct ProductEditTemplate {
    pub product: Product,
}

/// Render the new product form.
///
/// GET /add-product
#[instrument(skip_all)]
pub async fn new_form(RequireAdmin(_admin): RequireAdmin) -> ProductNewTemplate {
    ProductNewTemplate
}

/// Create a product from the multipart form, persisting an optional image.
///
/// POST /add-product
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a malformed body or missing required
/// fields, `AppError::Upload` if the image cannot be stored, and
/// `AppError::Database` if the insert fails.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    mut multipart: Multipart,
) -> Result<Redirect> {
    let mut name = None;
    let mut category = None;
    let mut description = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("malformed form: {e}")))?
    {
        let Some(field_name) = field.name().map(ToOwned::to_owned) else {
            continue;
        };

        match field_name.as_str() {
            "name" => name = Some(read_text(field).await?),
            "category" => category = Some(read_text(field).await?),
            "description" => description = Some(read_text(field).await?),
            "image" => {
                // Browsers send an empty file part when nothing is selected;
                // only a named upload gets stored.
                let file_name = field
                    .file_name()
                    .filter(|f| !f.is_empty())
                    .map(ToOwned::to_owned);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("malformed upload: {e}")))?;
                if let Some(file_name) = file_name {
                    image = Some(state.images().save(&file_name, &data).await?);
                }
            }
            _ => {}
        }
    }

    let product = NewProduct {
        name: require_field(name, "name")?,
        category: require_field(category, "category")?,
        description: require_field(description, "description")?,
        image,
    };

    let id = ProductRepository::new(state.pool()).create(&product).await?;
    tracing::info!(product_id = %id, "Product created");

    Ok(Redirect::to("/dashboard"))
}

/// Render the prefilled edit form.
///
/// GET /edit-product/{id}
///
/// # Errors
///
/// Returns `AppError::NotFound` if no product has this ID.
#[instrument(skip(state, _admin))]
pub async fn edit_form(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<ProductEditTemplate> {
    let product = ProductRepository::new(state.pool())
        .get(ProductId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(ProductEditTemplate { product })
}

/// Update a product's name, category, and description.
///
/// POST /edit-product/{id}
///
/// The image and ID are never touched by this path.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for empty required fields and
/// `AppError::Database` if the update fails.
#[instrument(skip(state, _admin, form))]
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    let update = ProductUpdate {
        name: require_field(Some(form.name), "name")?,
        category: require_field(Some(form.category), "category")?,
        description: require_field(Some(form.description), "description")?,
    };

    ProductRepository::new(state.pool())
        .update(ProductId::new(id), &update)
        .await?;

    Ok(Redirect::to("/dashboard"))
}

/// Delete a product.
///
/// GET /delete-product/{id}
///
/// Deleting an ID that no longer exists is a silent no-op.
///
/// # Errors
///
/// Returns `AppError::Database` if the delete fails.
#[instrument(skip(state, _admin))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Redirect> {
    let deleted = ProductRepository::new(state.pool())
        .delete(ProductId::new(id))
        .await?;
    tracing::info!(product_id = id, deleted, "Product delete");

    Ok(Redirect::to("/dashboard"))
}

/// Read a text field out of the multipart body.
async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("malformed form: {e}")))
}

/// Reject absent or empty required form values.
fn require_field(value: Option<String>, field: &str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{field} is required")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_field_present() {
        assert_eq!(
            require_field(Some("Widget".to_string()), "name").ok(),
            Some("Widget".to_string())
        );
    }

    #[test]
    fn test_require_field_missing_or_empty() {
        assert!(require_field(None, "name").is_err());
        assert!(require_field(Some(String::new()), "name").is_err());
    }
}
