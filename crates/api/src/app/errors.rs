use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

/// Message returned for every failed lookup, whatever the service reported.
pub const USER_NOT_FOUND: &str = "User not found";

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}

pub fn not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, USER_NOT_FOUND)
}
