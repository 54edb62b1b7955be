//! HTTP request handlers for API endpoints.

mod health;
mod navigate;
mod routes;

pub use health::health_handler;
pub use navigate::navigate_handler;
pub use routes::{route_by_name_handler, route_list_handler};
