mod domain;
mod clients;
mod config;
mod api;
mod inventory;
mod storage;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod order_actor;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};
use crate::app_system::{OrderSystem, setup_tracing};
use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::from_env();
    info!(?config, "Starting order service");

    let system = OrderSystem::start(&config)
        .await
        .with_context(|| format!("failed to open order log {}", config.orders_file.display()))?;

    let app = api::router(system.order_client.clone());
    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    info!(address = %listener.local_addr()?, "HTTP server listening for requests");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Router state is gone by now, so the order actor can drain
    system.shutdown().await?;

    info!("Order service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C signal"),
        () = terminate => info!("Received SIGTERM signal"),
    }
}
