//! Immutable route table built once at startup.

use std::collections::HashSet;

use thiserror::Error;

use super::entities::{RouteDescriptor, View};

/// Path of the public login route; also the guard's redirect target.
pub const LOGIN_PATH: &str = "/login";

/// Path of the protected dashboard route.
pub const DASHBOARD_PATH: &str = "/";

/// Reasons a set of descriptors cannot form a route table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route table must contain at least one route")]
    Empty,

    #[error("duplicate route path '{0}'")]
    DuplicatePath(String),

    #[error("duplicate route name '{0}'")]
    DuplicateName(String),

    #[error("route path '{0}' must start with '/'")]
    InvalidPath(String),
}

/// Ordered, immutable collection of route descriptors.
///
/// Every descriptor has a unique `path` and a unique `name`. Lookups are
/// exact: no prefix matching, no parameters, no fallback route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    /// Builds a table from descriptors, preserving their order.
    ///
    /// # Errors
    ///
    /// - [`RouteTableError::Empty`] when no descriptors are given
    /// - [`RouteTableError::InvalidPath`] for a path not starting with `/`
    /// - [`RouteTableError::DuplicatePath`] / [`RouteTableError::DuplicateName`]
    ///   when uniqueness is violated
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, RouteTableError> {
        if routes.is_empty() {
            return Err(RouteTableError::Empty);
        }

        let mut paths = HashSet::with_capacity(routes.len());
        let mut names = HashSet::with_capacity(routes.len());

        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(RouteTableError::InvalidPath(route.path.clone()));
            }
            if !paths.insert(route.path.as_str()) {
                return Err(RouteTableError::DuplicatePath(route.path.clone()));
            }
            if !names.insert(route.name.as_str()) {
                return Err(RouteTableError::DuplicateName(route.name.clone()));
            }
        }

        Ok(Self { routes })
    }

    /// Returns the dashboard's route table.
    ///
    /// | Path     | Name        | View        | Requires auth |
    /// |----------|-------------|-------------|---------------|
    /// | `/`      | `dashboard` | `Dashboard` | yes           |
    /// | `/login` | `login`     | `Login`     | no            |
    pub fn dashboard() -> Self {
        Self {
            routes: vec![
                RouteDescriptor::new(DASHBOARD_PATH, "dashboard", View::Dashboard).requiring_auth(),
                RouteDescriptor::new(LOGIN_PATH, "login", View::Login),
            ],
        }
    }

    /// Finds the descriptor whose path equals `path` exactly.
    pub fn find_by_path(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|r| r.path == path)
    }

    /// Finds the descriptor registered under `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::dashboard()
    }
}
