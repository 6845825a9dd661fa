//! Logging middleware

use std::time::Instant;

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use tracing::{info, warn};

/// Request logging middleware
///
/// Turn-on requests block until `make build` and `docker compose up`
/// finish, so the recorded duration covers the whole command.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    if response.status().is_success() {
        info!(%method, %path, status, %duration_ms, "Request completed");
    } else {
        warn!(%method, %path, status, %duration_ms, "Request completed with error status");
    }

    response
}
