//! `handset`: the device registry server binary.
//!
//! Usage:
//!   handset [-c <config.toml>] [--listen <addr>] [--mongo-uri <uri>]
//!
//! Logging is controlled with `RUST_LOG` (default `info`).

use anyhow::Context;
use clap::Parser;
use handset_sender::DeviceFactory;
use handset_server::{AppState, Cli, router};
use handset_storage::Database;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    info!("Starting handset v{}", handset_core::VERSION);
    let config = cli.resolve().context("failed to load configuration")?;

    // The MongoDB client is created on the first request, not here.
    let database = Database::new(config.database.clone())?;
    info!(
        database = %database.config().database,
        collection = %database.config().collection,
        "Document store configured"
    );
    let factory = DeviceFactory::default();
    info!(kinds = ?factory.kinds(), "Sender registry ready");

    let app = router(AppState::new(database, factory));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("Handset server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Handset server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
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
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining requests");
}
