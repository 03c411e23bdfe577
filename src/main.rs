//! URL relay service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request           ┌──────────────────────────────────────────┐
//!     ─────────────────────────┼─▶ http server ──▶ router                 │
//!                              │                    │                     │
//!                              │          GET /     │   GET /request?url= │
//!                              │            ▼       ▼                     │
//!                              │         banner   relay ── transient ─────┼──▶ Upstream
//!     Client Response          │            │       │      client         │
//!     ◀────────────────────────┼────────────┴───────┘  {status, content}  │
//!                              └──────────────────────────────────────────┘
//! ```
//!
//! One single-threaded event loop; each request is its own task and the
//! outbound GET is its only remote wait.

use std::time::Duration;

use tokio::net::TcpListener;

use url_relay::config::RelayConfig;
use url_relay::http::RelayServer;
use url_relay::lifecycle::{wait_for_signal, Shutdown};
use url_relay::observability::{logging, metrics};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RelayConfig::default();

    logging::init_logging(&config.observability);

    tracing::info!("url-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let grace = Duration::from_secs(config.listener.shutdown_grace_secs);
    let shutdown = Shutdown::new();
    let server = RelayServer::new(config);
    let serving = tokio::spawn(server.run(listener, shutdown.subscribe()));

    wait_for_signal().await;
    if shutdown.drain(grace).await {
        serving.await??;
    } else {
        // No relay timeout exists, so a stuck upstream can hold a request open.
        tracing::warn!(grace_secs = grace.as_secs(), "Drain deadline passed, abandoning in-flight requests");
        serving.abort();
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
