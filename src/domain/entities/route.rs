//! Route descriptor entity: one navigable path of the dashboard.

use serde::Serialize;

/// Renderable view a route points at.
///
/// The view layer owns the actual markup; routing only carries the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Dashboard,
    Login,
}

/// Access metadata attached to a route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    /// When `true`, navigation requires the session presence flag.
    pub requires_auth: bool,
}

/// A path/name pair mapped to a view and an access requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    pub path: String,
    pub name: String,
    pub component: View,
    pub meta: RouteMeta,
}

impl RouteDescriptor {
    /// Creates a public route (`requires_auth = false`).
    pub fn new(path: impl Into<String>, name: impl Into<String>, component: View) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component,
            meta: RouteMeta::default(),
        }
    }

    /// Marks the route as access-controlled.
    pub fn requiring_auth(mut self) -> Self {
        self.meta.requires_auth = true;
        self
    }

    /// Returns true if the route is access-controlled.
    pub fn requires_auth(&self) -> bool {
        self.meta.requires_auth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_route_is_public() {
        let route = RouteDescriptor::new("/login", "login", View::Login);

        assert_eq!(route.path, "/login");
        assert_eq!(route.name, "login");
        assert_eq!(route.component, View::Login);
        assert!(!route.requires_auth());
    }

    #[test]
    fn test_requiring_auth() {
        let route = RouteDescriptor::new("/", "dashboard", View::Dashboard).requiring_auth();

        assert!(route.requires_auth());
        assert!(route.meta.requires_auth);
    }

    #[test]
    fn test_serialize_shape() {
        let route = RouteDescriptor::new("/", "dashboard", View::Dashboard).requiring_auth();
        let json = serde_json::to_value(&route).unwrap();

        assert_eq!(json["path"], "/");
        assert_eq!(json["component"], "dashboard");
        assert_eq!(json["meta"]["requires_auth"], true);
    }
}
