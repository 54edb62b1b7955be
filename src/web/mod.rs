//! Web layer serving the dashboard pages.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - The navigation guard
//! - [`routes`] - Page routes built from the route table

pub mod handlers;
pub mod middleware;
pub mod routes;
