//! Request logging middleware.

use axum::{extract::Request, http::header, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Logs each webhook with its caller and outcome.
///
/// Rejections (4xx) are expected traffic from unregistered senders and are
/// logged at info; only relay failures reach warn.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_millis();
    let status = response.status();

    if status.is_server_error() {
        warn!(%method, %path, %user_agent, %status, elapsed_ms, "Webhook failed");
    } else if status.is_client_error() {
        info!(%method, %path, %user_agent, %status, elapsed_ms, "Webhook rejected");
    } else {
        debug!(%method, %path, %user_agent, %status, elapsed_ms, "Webhook handled");
    }

    response
}
