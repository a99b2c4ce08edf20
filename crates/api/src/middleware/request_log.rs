use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Log method, path, status and latency once the response is ready.
///
/// Server errors log at `error`, client errors at `warn`, the rest at `info`.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = started.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        tracing::error!(%method, %path, status, latency_ms, "Request failed");
    } else if response.status().is_client_error() {
        tracing::warn!(%method, %path, status, latency_ms, "Request rejected");
    } else {
        tracing::info!(%method, %path, status, latency_ms, "Request completed");
    }

    response
}
