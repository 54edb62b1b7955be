#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use dashboard_nav::domain::route_table::RouteTable;
use dashboard_nav::routes::app_router;
use dashboard_nav::state::AppState;
use std::sync::Arc;

pub const SESSION_COOKIE: &str = "user=alice";

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(RouteTable::dashboard()))
}

pub fn create_test_server() -> TestServer {
    let app = app_router(create_test_state());
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub fn location(response: &axum_test::TestResponse) -> Option<String> {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
