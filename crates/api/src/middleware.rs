use axum::{middleware::Next, response::Response};

/// Authentication hook run before every handler.
///
/// No authentication scheme is defined yet, so every request is forwarded
/// unchanged. Handlers must not rely on any identity being attached.
pub async fn auth_middleware(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    tracing::trace!(method = %req.method(), path = %req.uri().path(), "auth middleware: pass-through");
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{HeaderMap, Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use tower::ServiceExt as _;

    async fn echo(headers: HeaderMap, body: String) -> (StatusCode, String) {
        let marker = headers
            .get("x-trainer")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        (StatusCode::ACCEPTED, format!("{marker}:{body}"))
    }

    #[tokio::test]
    async fn forwards_request_untouched() {
        let app = Router::new()
            .route("/echo", post(echo))
            .layer(axum::middleware::from_fn(auth_middleware));

        let request = Request::builder()
            .method("POST")
            .uri("/echo")
            .header("x-trainer", "red")
            .body(Body::from("pikachu"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"red:pikachu");
    }

    #[tokio::test]
    async fn does_not_require_credentials() {
        let app = Router::new()
            .route("/echo", post(echo))
            .layer(axum::middleware::from_fn(auth_middleware));

        let request = Request::builder()
            .method("POST")
            .uri("/echo")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }
}
