//! Authentication endpoints.
//!
//! Token issuance belongs to the external identity provider; these handlers
//! only verify tokens, mirror the synced profile back, and manage the
//! session cookie.

use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::json;

use petcare_auth::{
    VerifyError, clear_session_cookie, landing_path, role_from_code, session_cookie,
};

use crate::app::{ApiContext, dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/me", get(me))
        .route("/sync", post(sync))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// `GET /api/auth/me` — verify the bearer token and return the profile.
pub async fn me(
    Extension(ctx): Extension<ApiContext>,
    headers: HeaderMap,
) -> axum::response::Response {
    let Some(token) = extract_bearer(&headers) else {
        return errors::fail(StatusCode::UNAUTHORIZED, "No token provided");
    };

    match ctx.verifier.verify(token) {
        Ok(profile) => errors::ok(json!(profile)),
        Err(VerifyError::InvalidToken) => {
            errors::fail(StatusCode::UNAUTHORIZED, "Invalid or expired token")
        }
        Err(VerifyError::Unavailable(err)) => {
            tracing::error!(%err, "identity provider unavailable");
            errors::fail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// `POST /api/auth/sync` — mirror a provider-registered user. 400 when
/// userId or email is missing.
pub async fn sync(Json(body): Json<dto::SyncRequest>) -> axum::response::Response {
    let user_id = body.user_id.as_deref().unwrap_or("");
    let email = body.email.as_deref().unwrap_or("");
    if user_id.is_empty() || email.is_empty() {
        return errors::fail(StatusCode::BAD_REQUEST, "userId and email are required");
    }

    errors::ok_with_message(
        "User synced successfully",
        json!({
            "userId": user_id,
            "email": email,
            "firstName": body.first_name.unwrap_or_default(),
            "lastName": body.last_name.unwrap_or_default(),
            "role": body.role.unwrap_or_default(),
        }),
    )
}

/// `POST /api/auth/login` — verify the provider-issued token, attach the
/// session cookie, and tell the client where to land.
pub async fn login(
    Extension(ctx): Extension<ApiContext>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    let Some(token) = body.token.filter(|t| !t.is_empty()) else {
        return errors::fail(StatusCode::BAD_REQUEST, "token is required");
    };

    let profile = match ctx.verifier.verify(&token) {
        Ok(profile) => profile,
        Err(VerifyError::InvalidToken) => {
            return errors::fail(StatusCode::UNAUTHORIZED, "Invalid or expired token");
        }
        Err(VerifyError::Unavailable(err)) => {
            tracing::error!(%err, "identity provider unavailable");
            return errors::fail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    };

    let redirect_to = landing_path(role_from_code(&profile.role));
    (
        StatusCode::OK,
        [(header::SET_COOKIE, session_cookie(&token))],
        Json(json!({
            "success": true,
            "data": { "user": profile, "redirectTo": redirect_to },
        })),
    )
        .into_response()
}

/// `POST /api/auth/logout` — clear the session cookie.
pub async fn logout() -> axum::response::Response {
    (
        StatusCode::OK,
        [(header::SET_COOKIE, clear_session_cookie())],
        Json(json!({ "success": true })),
    )
        .into_response()
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let token = headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .trim();
    if token.is_empty() { None } else { Some(token) }
}
