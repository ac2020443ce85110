//! Route guard middleware.
//!
//! Applies the pure `route_decision` predicate to page navigations. API and
//! health endpoints are exempt, matching the original edge matcher.

use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use petcare_auth::{RouteDecision, SESSION_COOKIE, route_decision};

/// Authenticated landing page used when the guard bounces a signed-in user
/// off a public entry path. Role-specific routing happens at login time, not
/// here.
const HOME_PATH: &str = "/owner";
const LOGIN_PATH: &str = "/login";

pub async fn route_guard(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    let path = req.uri().path().to_string();
    if path.starts_with("/api") || path == "/health" {
        return next.run(req).await;
    }

    let token_present = has_session_cookie(req.headers());
    match route_decision(token_present, &path) {
        RouteDecision::Allow => next.run(req).await,
        RouteDecision::RedirectToLogin => Redirect::temporary(LOGIN_PATH).into_response(),
        RouteDecision::RedirectToHome => Redirect::temporary(HOME_PATH).into_response(),
    }
}

fn has_session_cookie(headers: &axum::http::HeaderMap) -> bool {
    let Some(cookies) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    cookies.split(';').any(|pair| {
        let mut parts = pair.trim().splitn(2, '=');
        parts.next() == Some(SESSION_COOKIE) && parts.next().is_some_and(|v| !v.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> axum::http::HeaderMap {
        let mut headers = axum::http::HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn detects_session_cookie_among_others() {
        assert!(has_session_cookie(&headers_with_cookie("a=1; token=abc")));
        assert!(!has_session_cookie(&headers_with_cookie("a=1; other=abc")));
        assert!(!has_session_cookie(&headers_with_cookie("token=")));
        assert!(!has_session_cookie(&axum::http::HeaderMap::new()));
    }
}
