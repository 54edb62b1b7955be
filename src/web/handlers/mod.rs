//! HTML template rendering handlers for the dashboard pages.

mod dashboard;
mod login;

pub use dashboard::dashboard_handler;
pub use login::login_handler;
