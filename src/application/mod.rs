//! Application layer.
//!
//! - [`services::navigation_service::NavigationController`] - Route resolution and the auth guard

pub mod services;
