//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! # Public
//! GET  /                    - Landing page (also served at /home)
//! GET  /products            - Product listing, unfiltered
//! GET  /contact             - Quote request form
//! POST /contact             - Submit quote request
//! GET  /leadership          - Leadership page
//!
//! # Admin
//! GET  /admin               - Login form
//! POST /admin               - Login action
//! GET  /dashboard           - Filtered + paginated product list
//!                             (query params: search, category, page)
//! GET  /add-product         - New product form
//! POST /add-product         - Create product (+ optional image upload)
//! GET  /edit-product/{id}   - Prefilled edit form
//! POST /edit-product/{id}   - Update product
//! GET  /delete-product/{id} - Delete product
//! GET  /logout              - Clear session, redirect home
//! ```

pub mod admin_products;
pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod pages;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the public routes router.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/home", get(home::home))
        .route("/products", get(products::index))
        .route("/contact", get(contact::form).post(contact::submit))
        .route("/leadership", get(pages::leadership))
}

/// Create the admin routes router.
///
/// Individual handlers enforce the admin gate through the `RequireAdmin`
/// extractor; the login form itself is public.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(auth::login_page).post(auth::login))
        .route("/dashboard", get(dashboard::index))
        .route(
            "/add-product",
            get(admin_products::new_form).post(admin_products::create),
        )
        .route(
            "/edit-product/{id}",
            get(admin_products::edit_form).post(admin_products::update),
        )
        .route("/delete-product/{id}", get(admin_products::delete))
        .route("/logout", get(auth::logout))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new().merge(public_routes()).merge(admin_routes())
}

/// POST body shared by the add and edit product forms.
#[derive(Debug, serde::Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub description: String,
}
