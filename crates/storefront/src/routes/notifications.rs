//! Notifications route handler.
//!
//! There is no notification source yet; the page renders the empty state.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::routes::Layout;

/// Notifications page template.
#[derive(Template, WebTemplate)]
#[template(path = "notifications/index.html")]
pub struct NotificationsTemplate {
    pub layout: Layout,
}

/// Display the notifications page.
#[instrument(skip(session))]
pub async fn index(session: Session) -> impl IntoResponse {
    NotificationsTemplate {
        layout: Layout::load(&session).await,
    }
}
