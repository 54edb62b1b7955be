//! Core navigation entities.
//!
//! - [`RouteDescriptor`] - A navigable path with its view and access metadata
//! - [`Decision`] - Result of a guard evaluation
//! - [`NavigationState`] - Evaluating/Resolved state of one navigation attempt

pub mod decision;
pub mod route;

pub use decision::{Decision, NavigationState};
pub use route::{RouteDescriptor, RouteMeta, View};
