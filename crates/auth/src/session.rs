//! Session cookie semantics.
//!
//! The bearer token issued by the identity provider travels in a cookie:
//! name `token`, path `/`, 7-day max-age, SameSite=Strict, HttpOnly.
//! Logout clears it by setting Max-Age to 0.

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

const SESSION_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;

/// `Set-Cookie` value carrying the session token.
pub fn session_cookie(token: &str) -> String {
    format!(
        "{SESSION_COOKIE}={token}; Path=/; Max-Age={SESSION_MAX_AGE_SECS}; SameSite=Strict; HttpOnly"
    )
}

/// `Set-Cookie` value clearing the session.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; Max-Age=0; SameSite=Strict; HttpOnly")
}
