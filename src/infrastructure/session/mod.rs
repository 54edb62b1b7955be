//! Session presence flag adapters.
//!
//! Provides two [`crate::domain::session::SessionState`] implementations:
//! - [`CookieSession`] - Flag read from the HTTP `Cookie` header
//! - [`StaticSession`] - Flag fixed at construction

mod cookie_session;
mod static_session;

pub use cookie_session::CookieSession;
pub use static_session::StaticSession;
