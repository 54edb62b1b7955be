//! Fixed session flag, independent of any request.

use crate::domain::session::{SessionState, is_present_value};

/// A session flag fixed at construction.
///
/// Used by the `navctl` tool to evaluate the guard for a given flag value,
/// and by tests that need a deterministic session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSession {
    value: Option<String>,
}

impl StaticSession {
    pub fn new(value: Option<String>) -> Self {
        Self { value }
    }

    /// A session with no flag stored.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session whose flag holds `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self::new(Some(value.into()))
    }
}

impl SessionState for StaticSession {
    fn is_present(&self) -> bool {
        is_present_value(self.value.as_deref())
    }
}
