//! Navigation guard middleware for dashboard pages.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::REFERER},
    middleware::Next,
    response::{Redirect, Response},
};
use url::Url;

use crate::application::services::NavigationOutcome;
use crate::domain::entities::Decision;
use crate::infrastructure::session::CookieSession;
use crate::state::AppState;

/// Runs the navigation guard once for every page request.
///
/// # Flow
///
/// 1. Read the session presence flag from the `user` cookie
/// 2. Resolve the previous route from the `Referer` header, if any
/// 3. Evaluate the guard for the requested path
/// 4. On `Proceed`, continue to the page handler
/// 5. On `Redirect`, answer `303 See Other` with the target in `Location`
///
/// A path that matches no route is passed through untouched so the
/// router's default 404 applies.
///
/// # Example
///
/// ```rust,ignore
/// use axum::middleware;
/// use crate::web::middleware::navigation_guard;
///
/// let pages = web::routes::page_routes(state.navigator.table())
///     .route_layer(middleware::from_fn_with_state(state.clone(), navigation_guard::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let session = CookieSession::from_headers(req.headers());
    let from_path = referer_path(req.headers());
    let to_path = req.uri().path();

    let outcome = st
        .navigator
        .navigate(to_path, from_path.as_deref(), &session);

    tracing::debug!(
        to = %to_path,
        from = ?from_path,
        outcome = ?outcome,
        "Navigation guard evaluated"
    );

    match outcome {
        NavigationOutcome::Resolved(Decision::Redirect(target)) => Err(Redirect::to(&target)),
        NavigationOutcome::Resolved(Decision::Proceed) | NavigationOutcome::NotFound => {
            Ok(next.run(req).await)
        }
    }
}

/// Extracts the path component of the `Referer` header.
fn referer_path(headers: &HeaderMap) -> Option<String> {
    let referer = headers.get(REFERER)?.to_str().ok()?;
    let url = Url::parse(referer).ok()?;
    Some(url.path().to_string())
}
