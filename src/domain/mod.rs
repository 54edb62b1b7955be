//! Domain layer: routes, decisions and the session seam.
//!
//! Nothing here depends on HTTP or on how the session flag is stored.
//!
//! - [`entities`] - Route descriptors, guard decisions, navigation state
//! - [`route_table`] - The immutable [`route_table::RouteTable`]
//! - [`session`] - The [`session::SessionState`] trait read by the guard

pub mod entities;
pub mod route_table;
pub mod session;
