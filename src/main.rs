//! todo-boilerplate server entry point.
//!
//! Starts the Axum HTTP server with the REST and documentation endpoints.

use tracing_subscriber::EnvFilter;

use todo_boilerplate::api;
use todo_boilerplate::app_state::AppState;
use todo_boilerplate::config::{AppConfig, LogConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let log = LogConfig::from_env();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    // Load configuration
    let config = AppConfig::from_env()?;

    tracing::info!(
        addr = %config.listen_addr,
        environment = %config.environment,
        timezone = config.timezone.name(),
        "starting todo-boilerplate"
    );

    // Build application
    let listen_addr = config.listen_addr;
    let app = api::build_app(AppState::from_config(config));

    // Start server
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    tracing::info!(addr = %listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM where available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }
    tracing::info!("shutdown signal received");
}
