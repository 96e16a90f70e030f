//! Route definitions - domain model.
//!
//! Pure logic, no DOM or web_sys dependency: the full route table plus the
//! guard predicates the router service evaluates on every navigation.

use std::fmt::Display;

/// Application routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Marketing landing page (default route).
    #[default]
    Landing,
    Login,
    Register,
    /// Citizen dashboard (requires a session).
    Dashboard,
    /// Admin dashboard (requires a session with the admin flag).
    Admin,
    NotFound,
}

impl AppRoute {
    /// Parse a URL path into a route.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Landing,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/dashboard" => Self::Dashboard,
            "/admin" => Self::Admin,
            _ => Self::NotFound,
        }
    }

    /// URL path for this route.
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Admin => "/admin",
            Self::NotFound => "/404",
        }
    }

    /// Guard: does this route require a session?
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Admin)
    }

    /// Guard: does this route additionally require the admin flag?
    pub fn requires_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Should a signed-in user be bounced off this route (auth forms)?
    pub fn redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// Where anonymous users land when a guard rejects them.
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// Where non-admin users land when the admin guard rejects them.
    pub fn admin_failure_redirect() -> Self {
        Self::Dashboard
    }

    /// Where signed-in users land when leaving the auth forms.
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// Outcome of evaluating the guards for a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Load the requested route.
    Allow(AppRoute),
    /// Navigate somewhere else instead.
    Redirect(AppRoute),
}

impl GuardDecision {
    /// The route that will actually be loaded.
    pub fn target(&self) -> AppRoute {
        match self {
            GuardDecision::Allow(route) | GuardDecision::Redirect(route) => *route,
        }
    }
}

/// Evaluate the guard table for a target route against the session state.
///
/// Order matters: the session check precedes the admin check, and both
/// precede the bounce-off-auth-forms rule.
pub fn evaluate_guard(target: AppRoute, is_authenticated: bool, is_admin: bool) -> GuardDecision {
    if target.requires_auth() && !is_authenticated {
        return GuardDecision::Redirect(AppRoute::auth_failure_redirect());
    }
    if target.requires_admin() && !is_admin {
        return GuardDecision::Redirect(AppRoute::admin_failure_redirect());
    }
    if target.redirect_when_authenticated() && is_authenticated {
        return GuardDecision::Redirect(AppRoute::auth_success_redirect());
    }
    GuardDecision::Allow(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [
            AppRoute::Landing,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Dashboard,
            AppRoute::Admin,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert_eq!(AppRoute::from_path("/bogus"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/dashboard/extra"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path(""), AppRoute::NotFound);
    }

    #[test]
    fn guard_predicate_table() {
        assert!(!AppRoute::Landing.requires_auth());
        assert!(AppRoute::Dashboard.requires_auth());
        assert!(AppRoute::Admin.requires_auth());
        assert!(AppRoute::Admin.requires_admin());
        assert!(!AppRoute::Dashboard.requires_admin());
        assert!(AppRoute::Login.redirect_when_authenticated());
        assert!(AppRoute::Register.redirect_when_authenticated());
    }

    #[test]
    fn anonymous_user_is_sent_to_login() {
        assert_eq!(
            evaluate_guard(AppRoute::Dashboard, false, false),
            GuardDecision::Redirect(AppRoute::Login)
        );
        assert_eq!(
            evaluate_guard(AppRoute::Admin, false, false),
            GuardDecision::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn non_admin_is_sent_to_dashboard() {
        assert_eq!(
            evaluate_guard(AppRoute::Admin, true, false),
            GuardDecision::Redirect(AppRoute::Dashboard)
        );
        assert_eq!(
            evaluate_guard(AppRoute::Admin, true, true),
            GuardDecision::Allow(AppRoute::Admin)
        );
    }

    #[test]
    fn signed_in_user_skips_auth_forms() {
        assert_eq!(
            evaluate_guard(AppRoute::Login, true, false),
            GuardDecision::Redirect(AppRoute::Dashboard)
        );
        assert_eq!(
            evaluate_guard(AppRoute::Register, true, true),
            GuardDecision::Redirect(AppRoute::Dashboard)
        );
        assert_eq!(
            evaluate_guard(AppRoute::Login, false, false),
            GuardDecision::Allow(AppRoute::Login)
        );
    }

    #[test]
    fn public_routes_are_always_allowed() {
        for auth in [false, true] {
            assert_eq!(
                evaluate_guard(AppRoute::Landing, auth, false),
                GuardDecision::Allow(AppRoute::Landing)
            );
            assert_eq!(
                evaluate_guard(AppRoute::NotFound, auth, false),
                GuardDecision::Allow(AppRoute::NotFound)
            );
        }
    }
}
