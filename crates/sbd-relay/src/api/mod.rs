//! HTTP API for the relay.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use crate::error::{RelayError, RelayResult};
use crate::relay::Relay;
use axum::{
    http::{header, HeaderMap, Uri},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Translation pipeline
    pub relay: Arc<Relay>,
    /// Externally visible base URL, when the relay sits behind a proxy that
    /// rewrites `Host`
    pub public_base_url: Option<String>,
}

impl AppState {
    /// Create new application state.
    pub fn new(relay: Relay, public_base_url: Option<String>) -> Self {
        Self {
            relay: Arc::new(relay),
            public_base_url,
        }
    }

    /// Rebuild the URL Twilio called, as it was signed.
    pub fn request_url(&self, headers: &HeaderMap, uri: &Uri) -> RelayResult<String> {
        let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

        if let Some(base) = &self.public_base_url {
            return Ok(format!("{}{}", base.trim_end_matches('/'), path));
        }

        let host = headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .or_else(|| uri.authority().map(|a| a.as_str()))
            .ok_or_else(|| RelayError::Malformed("missing Host header".into()))?;

        Ok(format!("https://{}{}", host, path))
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/", post(handlers::webhook))
        .route("/webhook", post(handlers::webhook))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
