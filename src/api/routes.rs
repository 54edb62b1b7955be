//! API route configuration.

use crate::api::handlers::{navigate_handler, route_by_name_handler, route_list_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON routes exposing the route table and the guard.
///
/// # Endpoints
///
/// - `GET /routes`          - Route table in order
/// - `GET /routes/{name}`   - Route with the given symbolic name
/// - `GET /navigate`        - Guard decision for `?to=&from=`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/routes", get(route_list_handler))
        .route("/routes/{name}", get(route_by_name_handler))
        .route("/navigate", get(navigate_handler))
}
