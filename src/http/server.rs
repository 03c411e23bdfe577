//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with both handlers
//! - Wire up middleware (request ID, tracing)
//! - Serve on a listener until shutdown is signalled

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::RelayConfig;
use crate::http::handlers;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::lifecycle::ShutdownSignal;

/// HTTP server for the relay service.
///
/// Owned by the process entry point; nothing about it is global.
pub struct RelayServer {
    router: Router,
    config: RelayConfig,
}

impl RelayServer {
    /// Create a new server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        Self {
            router: Self::build_router(),
            config,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router() -> Router {
        Router::new()
            .route("/", get(handlers::info))
            .route("/request", get(handlers::relay))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID)),
            )
    }

    /// The assembled router, for serving in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a shutdown signal arrives, then drain.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            configured = %self.config.listener.bind_address,
            "HTTP server starting"
        );

        // The guard keeps the drain open until in-flight requests finish.
        let (triggered, _drain_guard) = shutdown.into_parts();
        axum::serve(listener, self.router)
            .with_graceful_shutdown(triggered)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
