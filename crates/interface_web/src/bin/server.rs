//! CRM web front-end server binary
//!
//! # Usage
//!
//! ```bash
//! HUBSPOT_ACCESS_TOKEN=pat-... CUSTOM_OBJECT_TYPE=2-123456 cargo run --bin crm-web
//! ```
//!
//! # Environment Variables
//!
//! * `HUBSPOT_ACCESS_TOKEN` - CRM private app token (required)
//! * `CUSTOM_OBJECT_TYPE` - Custom object type id or name (required)
//! * `HOST` - Server host (default: 0.0.0.0)
//! * `PORT` - Server port (default: 3000)
//! * `HUBSPOT_BASE_URL` - CRM API base URL (default: https://api.hubapi.com)
//! * `LOG_LEVEL` - trace, debug, info, warn, error (default: info); `RUST_LOG` wins

use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_crm::{HubSpotClient, RecordService};
use interface_web::{config::WebConfig, create_router};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Configuration problems are fatal before anything else starts
    let config = match WebConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_level);

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("ERROR: failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(serve(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = format!("{:#}", e), "Server stopped with an error");
            ExitCode::FAILURE
        }
    }
}

/// Builds the CRM client and serves until a shutdown signal arrives
async fn serve(config: WebConfig) -> anyhow::Result<()> {
    let client = HubSpotClient::new(config.credentials.clone()).context("failed to build CRM client")?;
    let service = RecordService::new(Arc::new(client), config.object_type.clone());

    tracing::info!(
        host = %config.host,
        port = config.port,
        crm = %config.credentials.base_url(),
        "Starting CRM web front-end"
    );
    tracing::info!(object_type = %config.object_type, "Custom Object Type");

    let app = create_router(service);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(%addr, "Server listening on http://localhost:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
