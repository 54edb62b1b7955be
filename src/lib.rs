//! # Dashboard Navigation
//!
//! Route table and authentication guard for the heart-rate monitor
//! dashboard, served with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Route descriptors, the route table, guard decisions, the session trait
//! - **Application Layer** ([`application`]) - [`application::services::NavigationController`]
//! - **Infrastructure Layer** ([`infrastructure`]) - Session flag adapters (cookie, static)
//! - **Web Layer** ([`web`]) - Dashboard pages and the navigation guard middleware
//! - **API Layer** ([`api`]) - JSON endpoints for the route table and guard decisions
//!
//! ## Routes
//!
//! | Path     | Name        | Requires auth |
//! |----------|-------------|---------------|
//! | `/`      | `dashboard` | yes           |
//! | `/login` | `login`     | no            |
//!
//! A visitor without a non-empty `user` cookie who requests `/` is
//! redirected to `/login`. Everything else proceeds.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{NavigationController, NavigationOutcome};
    pub use crate::domain::entities::{Decision, RouteDescriptor, View};
    pub use crate::domain::route_table::RouteTable;
    pub use crate::domain::session::SessionState;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
