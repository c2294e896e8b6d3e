//! # HTTP Server
//!
//! Builds the guarded item router and serves it.

use std::time::Duration;

use axum::{Router, middleware};
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use lms_config::{ApiConfig, LmsConfig, ServerConfig};
use lms_db::service::LmsService;

use crate::auth::require_api_key;
use crate::routes::item_routes;
use crate::state::AppState;

/// Assemble the full router: item routes, the API key guard, request
/// tracing and the request timeout.
///
/// The key guard is a route layer, so unmatched paths fall through to the
/// default `404`/`405` without touching it.
pub fn build_router(state: AppState, api: &ApiConfig, server: &ServerConfig) -> Router {
    item_routes(api)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
}

/// HTTP server for the items API.
pub struct LmsServer {
    config: ServerConfig,
    router: Router,
}

impl LmsServer {
    /// Create a server over `service` using the loaded configuration.
    pub fn new(service: LmsService, config: &LmsConfig) -> Self {
        if !config.auth.is_configured() {
            warn!("auth.api_key is empty; every request will be rejected with 401");
        }
        let state = AppState::new(service, &config.auth.api_key);
        let router = build_router(state, &config.api, &config.server);
        Self {
            config: config.server.clone(),
            router,
        }
    }

    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    #[must_use]
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the address cannot be bound or the listener fails.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        info!(addr = %listener.local_addr()?, "items API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
