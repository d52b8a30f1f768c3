use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use clap::Parser;
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;
use webcmd_core::{Interpreter, SessionStore};

mod cli;
mod http;

use http::server::{start_server, ServerConfig};
use http::state::{AppState, ServerStats};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = cli::Args::parse();
    let cfg = webcmd_core::config::load_default();

    let default_dir = match &cfg.shell.default_dir {
        Some(dir) => PathBuf::from(dir).canonicalize()?,
        None => std::env::current_dir()?,
    };

    let (shutdown_tx, _) = broadcast::channel(1);
    let state = AppState {
        interpreter: Arc::new(Interpreter::from_config(&cfg.shell)),
        sessions: Arc::new(SessionStore::new(default_dir)),
        stats: Arc::new(RwLock::new(ServerStats::new())),
        shutdown_tx,
    };

    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };

    start_server(config, state)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
