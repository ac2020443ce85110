//! HTTP application wiring (Axum router).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs
//! - `errors.rs`: the `{ success, data?, message? }` response envelope

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use petcare_auth::TokenVerifier;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Shared handler context.
#[derive(Clone)]
pub struct ApiContext {
    pub verifier: Arc<dyn TokenVerifier>,
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(verifier: Arc<dyn TokenVerifier>) -> Router {
    let ctx = ApiContext { verifier };

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api/auth", routes::auth::router())
        .layer(Extension(ctx))
        .layer(axum::middleware::from_fn(middleware::route_guard))
}
