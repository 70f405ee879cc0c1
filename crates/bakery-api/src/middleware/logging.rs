//! Request logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs method, path, status and latency for every request.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed = start.elapsed();

    if status.is_server_error() {
        tracing::error!(%method, %path, %status, ?elapsed, "request completed");
    } else if status.is_client_error() {
        tracing::warn!(%method, %path, %status, ?elapsed, "request completed");
    } else {
        tracing::info!(%method, %path, %status, ?elapsed, "request completed");
    }

    response
}
