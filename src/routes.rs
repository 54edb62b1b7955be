//! Top-level router configuration combining page and API routes.
//!
//! # Route Structure
//!
//! - `GET /`, `GET /login` - Dashboard pages from the route table (guarded)
//! - `GET /health`         - Liveness check (public)
//! - `/api/*`              - Route table and guard evaluation as JSON (public)
//!
//! Any other path falls through to the default `404 Not Found`.
//!
//! # Middleware
//!
//! - **Navigation guard** - Redirects protected pages to `/login` without a session
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling (`/login/` is routed as `/login`)

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::middleware::navigation_guard;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so the guard and the
/// route table's exact lookup see `/login` for `/login/`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let pages = web::routes::page_routes(state.navigator.table()).route_layer(
        middleware::from_fn_with_state(state.clone(), navigation_guard::layer),
    );

    let router = Router::new()
        .merge(pages)
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
