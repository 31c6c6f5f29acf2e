//! Product catalog records.

use millbrook_core::ProductId;

/// A product as stored in the catalog.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Product {
    /// Database ID, stable for the lifetime of the record.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Free-form category label (not an enumerated set).
    pub category: String,
    /// Description shown on the public listing.
    pub description: String,
    /// Stored filename of the uploaded image, if one was provided at creation.
    pub image: Option<String>,
}

/// Data for creating a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub description: String,
    /// Sanitized filename of an already-persisted upload.
    pub image: Option<String>,
}

/// Editable fields of a product.
///
/// The image and ID are never changed by the edit path.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub name: String,
    pub category: String,
    pub description: String,
}
