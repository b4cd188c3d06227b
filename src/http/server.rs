//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all forward handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener, serve with graceful shutdown
//! - Orchestrate extract → validate → build for each request

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ForwarderConfig;
use crate::forward::{build_redirect, extract_target, validate_domain};
use crate::http::request::RequestIdLayer;
use crate::http::response;
use crate::http::X_REQUEST_ID;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ForwarderConfig>,
}

/// HTTP server for the forwarder.
pub struct HttpServer {
    router: Router,
    config: ForwarderConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ForwarderConfig) -> Self {
        let state = AppState {
            config: Arc::new(config.clone()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ForwarderConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(forward_handler))
            .route("/", any(forward_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ForwarderConfig {
        &self.config
    }
}

/// Main forward handler.
/// Extracts the embedded target, validates its hostname, and redirects.
///
/// Terminal on first match: no target → usage, bad domain → 403,
/// otherwise → 302. Any HTTP method is accepted; only path and query
/// are consulted.
async fn forward_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let path = request.uri().path();
    let query = request.uri().query();
    let rules = &state.config.forward;

    let candidate = match extract_target(path, &rules.default_scheme) {
        Some(c) => c,
        None => {
            tracing::debug!(request_id = %request_id, "No target in path");
            return response::usage(&rules.homepage_url, &rules.allowed_suffix);
        }
    };

    let target = match validate_domain(&candidate, &rules.allowed_suffix) {
        Ok(url) => url,
        Err(reason) => {
            tracing::warn!(
                request_id = %request_id,
                candidate = %candidate,
                reason = %reason,
                "Target rejected"
            );
            return response::domain_rejected(&rules.allowed_suffix);
        }
    };

    let location = build_redirect(target, query);
    tracing::debug!(
        request_id = %request_id,
        location = %location,
        "Redirecting"
    );

    response::Redirect { location }.into_response()
}
