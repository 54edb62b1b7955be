//! Navigation controller: route resolution and the authentication guard.

use std::sync::Arc;

use crate::domain::entities::{Decision, NavigationState, RouteDescriptor};
use crate::domain::route_table::{LOGIN_PATH, RouteTable};
use crate::domain::session::SessionState;

/// Result of a full navigation attempt by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The target path matched a route and the guard produced a decision.
    Resolved(Decision),
    /// The target path matched no route. Handling it is left to the host.
    NotFound,
}

/// Maps paths to routes and gates protected routes on the session flag.
///
/// Holds the route table by shared reference; the session is passed into
/// every call so the controller itself carries no per-visitor state.
#[derive(Debug, Clone)]
pub struct NavigationController {
    table: Arc<RouteTable>,
}

impl NavigationController {
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Looks up `target_path` by exact match.
    pub fn resolve(&self, target_path: &str) -> Option<&RouteDescriptor> {
        self.table.find_by_path(target_path)
    }

    /// Looks up a route by its symbolic name.
    pub fn resolve_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.table.find_by_name(name)
    }

    /// Decides whether navigation to `to` may proceed.
    ///
    /// Returns `Redirect("/login")` when `to` requires auth and the session
    /// flag is absent, `Proceed` otherwise. `from` does not affect the
    /// decision; it is `None` on the initial navigation.
    ///
    /// The check is presence only: any stored value counts as logged in.
    pub fn guard(
        &self,
        to: &RouteDescriptor,
        _from: Option<&RouteDescriptor>,
        session: &dyn SessionState,
    ) -> Decision {
        if to.requires_auth() && !session.is_present() {
            Decision::Redirect(LOGIN_PATH.to_string())
        } else {
            Decision::Proceed
        }
    }

    /// Runs the guard and reports the decision through `next`.
    ///
    /// `next(None)` means proceed, `next(Some(path))` means redirect to
    /// `path`. `next` is called exactly once.
    pub fn before_each<F>(
        &self,
        to: &RouteDescriptor,
        from: Option<&RouteDescriptor>,
        session: &dyn SessionState,
        next: F,
    ) where
        F: FnOnce(Option<&str>),
    {
        let decision = self.guard(to, from, session);
        next(decision.redirect_target());
    }

    /// Resolves `to_path` and evaluates the guard once.
    ///
    /// An unknown `from_path` is treated as no previous route.
    pub fn navigate(
        &self,
        to_path: &str,
        from_path: Option<&str>,
        session: &dyn SessionState,
    ) -> NavigationOutcome {
        let Some(to) = self.resolve(to_path) else {
            return NavigationOutcome::NotFound;
        };
        let from = from_path.and_then(|p| self.resolve(p));

        let decision = NavigationState::begin(to, from)
            .into_decision(|to, from| self.guard(to, from, session));
        NavigationOutcome::Resolved(decision)
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(Arc::new(RouteTable::dashboard()))
    }
}
