//! Page routes generated from the route table.

use crate::domain::entities::View;
use crate::domain::route_table::RouteTable;
use crate::state::AppState;
use crate::web::handlers::{dashboard_handler, login_handler};
use axum::{
    Router,
    routing::{MethodRouter, get},
};

/// Builds one `GET` route per table entry, in table order.
///
/// Access control is not applied here; wrap the result with
/// [`crate::web::middleware::navigation_guard::layer`].
pub fn page_routes(table: &RouteTable) -> Router<AppState> {
    table.iter().fold(Router::new(), |router, route| {
        router.route(&route.path, view_handler(route.component))
    })
}

/// Maps a view reference to the handler that renders it.
fn view_handler(view: View) -> MethodRouter<AppState> {
    match view {
        View::Dashboard => get(dashboard_handler),
        View::Login => get(login_handler),
    }
}
