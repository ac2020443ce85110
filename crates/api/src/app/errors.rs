//! The `{ success, data?, message? }` response envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

pub fn ok(data: serde_json::Value) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(json!({ "success": true, "data": data })),
    )
        .into_response()
}

pub fn ok_with_message(
    message: impl Into<String>,
    data: serde_json::Value,
) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": message.into(),
            "data": data,
        })),
    )
        .into_response()
}

pub fn fail(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        Json(json!({ "success": false, "message": message.into() })),
    )
        .into_response()
}
