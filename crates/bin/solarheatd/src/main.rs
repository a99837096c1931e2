//! # solarheatd — solar heating dashboard daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`solarheat.toml` + `SOLARHEAT_*` env vars)
//! - Initialise structured logging
//! - Construct the controller backend client (driven adapter)
//! - Construct the dashboard controller and start background polling
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT), stopping the poller last
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use solarheat_adapter_http_axum::router;
use solarheat_adapter_http_axum::state::AppState;
use solarheat_adapter_http_reqwest::ReqwestBackend;
use solarheat_app::poller::Poller;
use solarheat_app::services::dashboard::DashboardController;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Backend
    let backend =
        ReqwestBackend::new(&config.backend).context("failed to configure backend client")?;
    tracing::info!(url = backend.base_url(), "using controller backend");

    // Controller + polling
    let dashboard = Arc::new(DashboardController::new(backend));
    let mut poller = Poller::start(Arc::clone(&dashboard), config.poll_interval());

    // HTTP
    let state =
        AppState::from_arc(dashboard).with_refresh_seconds(config.dashboard.refresh_seconds);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "solarheatd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server failed")?;

    poller.shutdown().await;
    tracing::info!("solarheatd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
