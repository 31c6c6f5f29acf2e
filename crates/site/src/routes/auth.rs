//! Admin login and logout route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::{clear_current_admin, set_current_admin};
use crate::services::auth::AuthError;
use crate::state::AppState;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    /// Generic failure message; never distinguishes which credential was wrong.
    pub error: Option<String>,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Render the login page.
///
/// GET /admin
#[instrument]
pub async fn login_page() -> LoginTemplate {
    LoginTemplate { error: None }
}

/// Authenticate and establish the admin session.
///
/// POST /admin
///
/// On success the validated principal is stored in the session and the
/// browser is sent to the dashboard; on a credential mismatch the form is
/// re-rendered with a generic message.
///
/// # Errors
///
/// Returns `AppError` if the session cannot be written or the configured
/// credential is unusable.
#[instrument(skip_all, fields(username = %form.username))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match state.auth().authenticate(&form.username, &form.password) {
        Ok(admin) => {
            set_current_admin(&session, &admin)
                .await
                .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;
            tracing::info!("Admin logged in");
            Ok(Redirect::to("/dashboard").into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("Failed admin login attempt");
            Ok(LoginTemplate {
                error: Some("Invalid username or password".to_string()),
            }
            .into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Clear the admin session and redirect home.
///
/// GET /logout
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Redirect {
    // Clearing an already-empty session is fine; nothing to report either way.
    let _ = clear_current_admin(&session).await;
    Redirect::to("/")
}
