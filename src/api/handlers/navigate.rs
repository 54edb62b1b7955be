//! Handler evaluating the navigation guard on behalf of a client.

use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
};
use serde_json::json;

use crate::api::dto::navigate::{NavigateQuery, NavigateResponse};
use crate::application::services::NavigationOutcome;
use crate::error::AppError;
use crate::infrastructure::session::CookieSession;
use crate::state::AppState;

/// Evaluates the guard for `to` using the caller's session cookie.
///
/// # Endpoint
///
/// `GET /api/navigate?to=/&from=/login`
///
/// # Response
///
/// ```json
/// { "to": "/", "decision": "redirect", "target": "/login" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request` if `to` is not an absolute path
/// - `404 Not Found` if `to` matches no route
pub async fn navigate_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NavigateQuery>,
) -> Result<Json<NavigateResponse>, AppError> {
    if !query.to.starts_with('/') {
        return Err(AppError::bad_request(
            "Target must be an absolute path",
            json!({ "to": query.to }),
        ));
    }

    let session = CookieSession::from_headers(&headers);

    let outcome = state
        .navigator
        .navigate(&query.to, query.from.as_deref(), &session);

    match outcome {
        NavigationOutcome::Resolved(decision) => Ok(Json(NavigateResponse {
            to: query.to,
            from: query.from,
            decision,
        })),
        NavigationOutcome::NotFound => Err(AppError::not_found(
            "Route not found",
            json!({ "to": query.to }),
        )),
    }
}
