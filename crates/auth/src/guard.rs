//! Route guard: a stateless predicate executed per navigation.
//!
//! No role-based branching happens here; role-based destinations are chosen
//! once, at login-response time, via [`landing_path`].

use petcare_domain::UserRole;

/// Paths reachable without a session token. `/` matches exactly, the rest
/// match by prefix.
pub const PUBLIC_ROUTES: &[&str] = &["/", "/login", "/register", "/forgot-password"];

/// Outcome of guarding a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

pub fn is_public_route(path: &str) -> bool {
    PUBLIC_ROUTES
        .iter()
        .any(|route| match *route {
            "/" => path == "/",
            prefix => path.starts_with(prefix),
        })
}

/// Guard a navigation: unauthenticated users are pushed off private paths,
/// authenticated users are pushed off public entry paths (except the root
/// landing page).
pub fn route_decision(token_present: bool, path: &str) -> RouteDecision {
    let public = is_public_route(path);
    if !token_present && !public {
        return RouteDecision::RedirectToLogin;
    }
    if token_present && public && path != "/" {
        return RouteDecision::RedirectToHome;
    }
    RouteDecision::Allow
}

/// Authenticated landing page for a role, used only when handling the login
/// response.
pub fn landing_path(role: UserRole) -> &'static str {
    match role {
        UserRole::Owner => "/owner",
        UserRole::Provider => "/provider",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_matrix() {
        use RouteDecision::*;

        // no token
        assert_eq!(route_decision(false, "/"), Allow);
        assert_eq!(route_decision(false, "/login"), Allow);
        assert_eq!(route_decision(false, "/register"), Allow);
        assert_eq!(route_decision(false, "/owner"), RedirectToLogin);
        assert_eq!(route_decision(false, "/owner/settings"), RedirectToLogin);

        // token present
        assert_eq!(route_decision(true, "/"), Allow);
        assert_eq!(route_decision(true, "/login"), RedirectToHome);
        assert_eq!(route_decision(true, "/forgot-password"), RedirectToHome);
        assert_eq!(route_decision(true, "/owner"), Allow);
        assert_eq!(route_decision(true, "/provider"), Allow);
    }

    #[test]
    fn public_route_prefix_matching() {
        assert!(is_public_route("/login/help"));
        assert!(!is_public_route("/owner"));
        // only the exact root is public, not every path
        assert!(is_public_route("/"));
    }

    #[test]
    fn landing_depends_on_role() {
        assert_eq!(landing_path(UserRole::Owner), "/owner");
        assert_eq!(landing_path(UserRole::Provider), "/provider");
    }
}
