//! Web-specific middleware.

pub mod navigation_guard;
