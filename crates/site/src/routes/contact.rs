//! Contact / quote request route handlers.
//!
//! The form writes straight into the quote store; submissions are read
//! out-of-band, never through the site.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use crate::db::QuoteRepository;
use crate::error::Result;
use crate::filters;
use crate::models::NewQuote;
use crate::state::AppState;

/// Contact form template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate;

/// Quote request form data.
#[derive(Debug, Deserialize)]
pub struct QuoteForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Render the contact form.
///
/// GET /contact
#[instrument]
pub async fn form() -> ContactTemplate {
    ContactTemplate
}

/// Record a quote request and bounce back to the landing page.
///
/// POST /contact
///
/// The submission is stored as-is: no email-format validation and no spam
/// protection, matching the intake contract.
///
/// # Errors
///
/// Returns `AppError::Database` if the insert fails.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<QuoteForm>,
) -> Result<Redirect> {
    let quote = NewQuote {
        name: form.name,
        email: form.email,
        message: form.message,
    };

    let id = QuoteRepository::new(state.pool()).create(&quote).await?;
    tracing::info!(quote_id = %id, "Quote request recorded");

    Ok(Redirect::to("/"))
}
