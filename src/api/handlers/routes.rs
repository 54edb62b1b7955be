//! Handlers exposing the route table.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::routes::RouteListResponse;
use crate::domain::entities::RouteDescriptor;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every route in table order.
///
/// # Endpoint
///
/// `GET /api/routes`
pub async fn route_list_handler(State(state): State<AppState>) -> Response {
    let table = state.navigator.table();
    Json(RouteListResponse {
        count: table.len(),
        routes: table.routes(),
    })
    .into_response()
}

/// Looks up a route by its symbolic name.
///
/// # Endpoint
///
/// `GET /api/routes/{name}`
///
/// # Errors
///
/// Returns `404 Not Found` if no route has that name.
pub async fn route_by_name_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RouteDescriptor>, AppError> {
    state
        .navigator
        .resolve_name(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found("Route not found", json!({ "name": name })))
}
