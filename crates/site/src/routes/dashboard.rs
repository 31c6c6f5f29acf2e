//! Admin dashboard route handler.
//!
//! The dashboard is the filtered, paginated view of the catalog; public
//! pages show the same records without filters.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use crate::db::ProductRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::{CatalogFilter, Product};
use crate::state::AppState;

/// Dashboard query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub page: Option<u32>,
}

/// One pagination link.
#[derive(Debug, Clone)]
pub struct PageLink {
    pub number: u32,
    pub current: bool,
}

/// One category option for the filter dropdown.
#[derive(Debug, Clone)]
pub struct CategoryOption {
    pub name: String,
    pub selected: bool,
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub username: String,
    pub products: Vec<Product>,
    /// Echoed search box value ("" when unfiltered).
    pub search: String,
    /// Echoed category filter value ("" when unfiltered).
    pub category: String,
    pub categories: Vec<CategoryOption>,
    pub total: i64,
    pub page: u32,
    pub total_pages: u32,
    pub pages: Vec<PageLink>,
}

/// Render the filtered, paginated product list.
///
/// GET /dashboard?search=&category=&page=
///
/// # Errors
///
/// Returns `AppError::Database` if a catalog query fails.
#[instrument(skip(state, admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(query): Query<DashboardQuery>,
) -> Result<DashboardTemplate> {
    let filter = CatalogFilter::new(query.search, query.category, query.page);

    let repo = ProductRepository::new(state.pool());
    let page = repo.page(&filter).await?;
    let category_names = repo.categories().await?;

    let search = filter.search().unwrap_or_default().to_string();
    let category = filter.category().unwrap_or_default().to_string();

    let categories = category_names
        .into_iter()
        .map(|name| CategoryOption {
            selected: name == category,
            name,
        })
        .collect();

    let pages = (1..=page.total_pages)
        .map(|number| PageLink {
            number,
            current: number == page.page,
        })
        .collect();

    Ok(DashboardTemplate {
        username: admin.username,
        products: page.products,
        search,
        category,
        categories,
        total: page.total,
        page: page.page,
        total_pages: page.total_pages,
        pages,
    })
}
