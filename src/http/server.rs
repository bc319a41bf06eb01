//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the relay handler
//! - Wire up middleware (CORS, tracing, request timeout)
//! - Bind server to listener
//! - Map bridge failures to the uniform 500 response shape

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::bridge::TcpBridge;
use crate::config::RelayConfig;
use crate::http::response::RelayFailure;

/// Application state injected into handlers.
///
/// The bridge holds no per-request state, so sharing one instance across
/// concurrent handlers is race-free by construction.
#[derive(Clone)]
pub struct AppState {
    pub bridge: Arc<TcpBridge>,
}

/// HTTP server for the relay.
pub struct RelayServer {
    router: Router,
    config: RelayConfig,
}

impl RelayServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let bridge = Arc::new(TcpBridge::new(&config.backend, &config.timeouts));
        let state = AppState { bridge };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        Router::new()
            .route("/get-recipe", post(relay_handler))
            .with_state(state)
            // Any origin: suitable for trusted/internal deployment only.
            .layer(CorsLayer::permissive())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend = %self.config.backend.address,
            "Relay listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("Relay stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Relay handler for `POST /get-recipe`.
///
/// The body is parsed as JSON by the extractor before this runs; malformed
/// bodies never reach the bridge. The payload itself is passed through
/// opaquely, and so is the backend's response.
async fn relay_handler(State(state): State<AppState>, Json(payload): Json<Value>) -> Response {
    tracing::debug!("Relaying request to backend");

    match state.bridge.relay(&payload).await {
        Ok(document) => (StatusCode::OK, Json(document)).into_response(),
        Err(e) => {
            tracing::error!(backend = %state.bridge.backend_addr(), error = %e, "Relay failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RelayFailure::new(e.to_string())),
            )
                .into_response()
        }
    }
}
