//! Login page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the login page.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
///
/// The sign-in form posts to the authentication service, which sets the
/// `user` cookie on success. This handler only serves the page.
pub async fn login_handler() -> impl IntoResponse {
    LoginTemplate {}
}
