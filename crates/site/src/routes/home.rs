//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

use crate::filters;
use crate::middleware::OptionalAdmin;
use crate::models::CurrentAdmin;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    /// Present when an admin is logged in; the header then links to the
    /// dashboard instead of the login form.
    pub admin: Option<CurrentAdmin>,
}

/// Render the landing page.
///
/// GET / (also mounted at /home)
#[instrument(skip_all)]
pub async fn home(OptionalAdmin(admin): OptionalAdmin) -> HomeTemplate {
    HomeTemplate { admin }
}
