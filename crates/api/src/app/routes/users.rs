use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use pokemonapi_core::User;

use crate::app::errors;
use crate::app::services::UserService;

pub fn router() -> Router {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/", post(create_user))
        .route("/users/:id", get(get_user))
}

pub async fn create_user(
    Extension(service): Extension<Arc<dyn UserService>>,
    body: Result<Json<User>, JsonRejection>,
) -> axum::response::Response {
    // Every binding failure is a client error, including the ones axum would
    // report as 415/422.
    let Json(user) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_error(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match service.create_user(user).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "create user failed");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

pub async fn get_user(
    Extension(service): Extension<Arc<dyn UserService>>,
    path: Result<Path<String>, PathRejection>,
) -> axum::response::Response {
    // An undecodable id is just another failed lookup.
    let Path(id) = match path {
        Ok(p) => p,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "user id rejected");
            return errors::not_found();
        }
    };

    match service.get_user(&id).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => {
            tracing::debug!(user_id = %id, error = %e, "user lookup failed");
            errors::not_found()
        }
    }
}
