//! Guard decisions and the per-attempt navigation state machine.

use serde::Serialize;

use super::route::RouteDescriptor;

/// Outcome of a single guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "target", rename_all = "snake_case")]
pub enum Decision {
    /// Continue to the requested route.
    Proceed,
    /// Abandon the requested route and navigate to the given path instead.
    Redirect(String),
}

impl Decision {
    /// Returns the redirect target, or `None` for [`Decision::Proceed`].
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Decision::Proceed => None,
            Decision::Redirect(target) => Some(target),
        }
    }
}

/// State of one navigation attempt.
///
/// `Evaluating` is the initial state; `Resolved` is terminal. The transition
/// happens in a single synchronous call to [`NavigationState::into_decision`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationState<'a> {
    Evaluating {
        to: &'a RouteDescriptor,
        from: Option<&'a RouteDescriptor>,
    },
    Resolved(Decision),
}

impl<'a> NavigationState<'a> {
    /// Starts a navigation attempt.
    pub fn begin(to: &'a RouteDescriptor, from: Option<&'a RouteDescriptor>) -> Self {
        Self::Evaluating { to, from }
    }

    /// Consumes the attempt and returns its decision.
    ///
    /// `evaluate` runs once for an `Evaluating` attempt and is not called for
    /// one that is already `Resolved`.
    pub fn into_decision<F>(self, evaluate: F) -> Decision
    where
        F: FnOnce(&'a RouteDescriptor, Option<&'a RouteDescriptor>) -> Decision,
    {
        match self {
            Self::Evaluating { to, from } => evaluate(to, from),
            Self::Resolved(decision) => decision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::View;

    #[test]
    fn test_redirect_target() {
        assert_eq!(Decision::Proceed.redirect_target(), None);
        assert_eq!(
            Decision::Redirect("/login".to_string()).redirect_target(),
            Some("/login")
        );
    }

    #[test]
    fn test_evaluating_runs_guard_once() {
        let route = RouteDescriptor::new("/", "dashboard", View::Dashboard);
        let mut calls = 0;

        let decision = NavigationState::begin(&route, None).into_decision(|to, from| {
            calls += 1;
            assert_eq!(to.name, "dashboard");
            assert!(from.is_none());
            Decision::Redirect("/login".to_string())
        });

        assert_eq!(calls, 1);
        assert_eq!(decision, Decision::Redirect("/login".to_string()));
    }

    #[test]
    fn test_resolved_is_terminal() {
        let state = NavigationState::Resolved(Decision::Proceed);

        let decision = state.into_decision(|_, _| Decision::Redirect("/elsewhere".to_string()));

        assert_eq!(decision, Decision::Proceed);
    }

    #[test]
    fn test_decision_serialization() {
        let json = serde_json::to_value(Decision::Redirect("/login".to_string())).unwrap();
        assert_eq!(json["decision"], "redirect");
        assert_eq!(json["target"], "/login");

        let json = serde_json::to_value(Decision::Proceed).unwrap();
        assert_eq!(json["decision"], "proceed");
    }
}
