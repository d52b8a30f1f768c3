//! HTTP server lifecycle management.

use crate::http::{middleware::request_logger, routes::create_router, AppState};
use axum::middleware;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

/// Server bind configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
        }
    }
}

/// Start the HTTP server and block until shutdown.
pub async fn start_server(
    config: ServerConfig,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Starting HTTP server on {}:{}", config.host, config.port);

    let router = create_router(state.clone());
    let app = router
        .layer(middleware::from_fn(request_logger))
        .layer(crate::http::middleware::create_cors_layer());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Terminal available at http://{}", addr);

    let mut shutdown_rx = state.shutdown_tx.subscribe();

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    info!("Received Ctrl+C signal");
                }
                _ = shutdown_rx.recv() => {
                    info!("Received shutdown signal from API");
                }
                _ = wait_for_sigterm() => {
                    info!("Received SIGTERM signal");
                }
            }

            info!("Starting graceful shutdown...");
        })
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to setup SIGTERM handler");
    sigterm.recv().await;
}

#[cfg(not(unix))]
async fn wait_for_sigterm() {
    // No SIGTERM on Windows; Ctrl+C or the shutdown API interrupts instead.
    std::future::pending::<()>().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::state::ServerStats;
    use std::sync::{Arc, RwLock};
    use std::time::Duration;
    use tokio::sync::broadcast;
    use webcmd_core::shell::HostShellSpawner;
    use webcmd_core::{Interpreter, SessionStore};

    #[tokio::test]
    async fn server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[tokio::test]
    async fn server_shuts_down_on_broadcast() {
        let dir = tempfile::tempdir().unwrap();
        let (shutdown_tx, _) = broadcast::channel(1);
        let state = AppState {
            interpreter: Arc::new(Interpreter::new(Arc::new(HostShellSpawner::new()))),
            sessions: Arc::new(SessionStore::new(dir.path().to_path_buf())),
            stats: Arc::new(RwLock::new(ServerStats::new())),
            shutdown_tx: shutdown_tx.clone(),
        };

        let config = ServerConfig {
            host: "127.0.0.1".into(),
            port: 18123, // non-standard port to avoid clashes
        };

        let server_handle = tokio::spawn(async move { start_server(config, state).await });

        tokio::time::sleep(Duration::from_millis(300)).await;
        let _ = shutdown_tx.send(());

        let result = tokio::time::timeout(Duration::from_secs(5), server_handle).await;
        assert!(result.is_ok(), "Server should shutdown gracefully");
    }
}
