//! Middleware run around every route

use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::{info, warn};

/// Logs method, path, status and latency of each request.
pub async fn log_request(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed = start.elapsed();
    if status.is_client_error() || status.is_server_error() {
        warn!("{method} {path} -> {status} ({elapsed:?})");
    } else {
        info!("{method} {path} -> {status} ({elapsed:?})");
    }

    response
}
