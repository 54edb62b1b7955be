//! Infrastructure layer.
//!
//! - [`session`] - Session presence flag adapters
pub mod session;
