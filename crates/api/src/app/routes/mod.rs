use axum::{routing::get, Router};

pub mod system;
pub mod users;

/// Router for the user endpoints.
pub fn router() -> Router {
    Router::new().merge(users::router())
}

/// Router for system endpoints (liveness).
pub fn system_router() -> Router {
    Router::new().route("/health", get(system::health))
}
