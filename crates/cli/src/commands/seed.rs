//! Catalog seeding command.
//!
//! Loads a handful of demo products so a fresh install has something to
//! show on /products and /dashboard.

use millbrook_site::db::{self, ProductRepository};
use millbrook_site::models::NewProduct;

const DEMO_PRODUCTS: &[(&str, &str, &str)] = &[
    (
        "Torque Wrench 1/2\"",
        "Hand Tools",
        "Click-type torque wrench, 20-150 ft-lb range, chrome vanadium.",
    ),
    (
        "Cobalt Drill Index",
        "Cutting Tools",
        "29-piece M35 cobalt drill set, 1/16\" to 1/2\" by 64ths.",
    ),
    (
        "Flap Disc 4-1/2\"",
        "Abrasives",
        "Zirconia flap disc, 60 grit, type 29, box of ten.",
    ),
    (
        "Shop Crane 2-Ton",
        "Equipment",
        "Folding engine crane with 8-ton long-ram jack.",
    ),
    (
        "Cutting Fluid 1 gal",
        "Consumables",
        "Sulfur-free cutting and tapping fluid for ferrous and non-ferrous work.",
    ),
    (
        "Machinist Square Set",
        "Measuring",
        "4-piece hardened steel square set, ground faces.",
    ),
];

/// Insert the demo products.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or an insert fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let url = super::database_url();

    let pool = db::create_pool(&url).await?;
    db::run_migrations(&pool).await?;

    let repo = ProductRepository::new(&pool);
    for (name, category, description) in DEMO_PRODUCTS {
        let id = repo
            .create(&NewProduct {
                name: (*name).to_string(),
                category: (*category).to_string(),
                description: (*description).to_string(),
                image: None,
            })
            .await?;
        tracing::info!(product_id = %id, name, "Seeded product");
    }

    tracing::info!("Seeded {} products", DEMO_PRODUCTS.len());
    Ok(())
}
