//! Session presence abstraction consumed by the navigation guard.

/// Storage key of the session presence flag.
pub const SESSION_KEY: &str = "user";

/// Read-only view of the session presence flag.
///
/// The guard only asks whether a logged-in session exists. It never reads
/// the stored value, checks expiry, or writes the flag; setting and clearing
/// it belongs to the login/logout flow.
///
/// # Implementations
///
/// - [`crate::infrastructure::session::CookieSession`] - Flag carried in the request `Cookie` header
/// - [`crate::infrastructure::session::StaticSession`] - Fixed flag for the CLI and tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait SessionState: Send + Sync {
    /// Returns `true` if the flag is present.
    fn is_present(&self) -> bool;
}

/// Returns `true` if a raw stored flag value counts as a present session.
///
/// Any non-empty value counts; an empty string is the same as no value.
pub fn is_present_value(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
