//! `petcare-api` — the thin HTTP verification surface.
//!
//! Two JSON endpoints delegate to the external identity provider boundary
//! (`/api/auth/me`, `/api/auth/sync`), login/logout manage the session
//! cookie, and page navigations pass through the route guard middleware.

pub mod app;
pub mod middleware;

pub use app::build_app;
