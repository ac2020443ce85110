//! `petcare-auth` — session and routing boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: the route
//! guard is a pure predicate over (token presence, path), the session cookie
//! is described as attribute values, and token verification sits behind a
//! trait so the external identity provider never leaks into domain code.

pub mod guard;
pub mod session;
pub mod verify;

pub use guard::{RouteDecision, is_public_route, landing_path, route_decision};
pub use session::{SESSION_COOKIE, clear_session_cookie, session_cookie};
pub use verify::{StaticTokenVerifier, TokenVerifier, VerifiedProfile, VerifyError, role_from_code};
