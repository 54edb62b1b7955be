//! Dashboard home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the dashboard home page.
///
/// Renders `templates/dashboard.html`. Live heart-rate data is loaded by
/// the page itself; the server only provides the shell.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {}

/// Renders the dashboard home page.
///
/// # Endpoint
///
/// `GET /` (requires the session presence flag)
pub async fn dashboard_handler() -> impl IntoResponse {
    DashboardTemplate {}
}
