//! Static content page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

use crate::filters;

/// Leadership page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/leadership.html")]
pub struct LeadershipTemplate;

/// Display the leadership page.
///
/// GET /leadership
#[instrument]
pub async fn leadership() -> LeadershipTemplate {
    LeadershipTemplate
}
