//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the `UserService` boundary and its in-memory implementation
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware;

pub mod errors;
pub mod routes;
pub mod services;

use services::UserService;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The auth middleware wraps every route, system routes included.
pub fn build_app(service: Arc<dyn UserService>) -> Router {
    Router::new()
        .merge(routes::system_router())
        .merge(routes::router())
        .layer(Extension(service))
        .layer(axum::middleware::from_fn(middleware::auth_middleware))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
