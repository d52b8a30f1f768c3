//! Shared HTTP server state.

use std::sync::{Arc, RwLock};
use std::time::Instant;

use tokio::sync::broadcast;
use webcmd_core::{Interpreter, SessionStore};

#[derive(Clone)]
pub struct AppState {
    pub interpreter: Arc<Interpreter>,
    pub sessions: Arc<SessionStore>,
    pub stats: Arc<RwLock<ServerStats>>,
    pub shutdown_tx: broadcast::Sender<()>,
}

pub struct ServerStats {
    started: Instant,
    pub requests_total: u64,
}

impl ServerStats {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            requests_total: 0,
        }
    }

    pub fn increment_request(&mut self) {
        self.requests_total += 1;
    }

    pub fn uptime_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

impl Default for ServerStats {
    fn default() -> Self {
        Self::new()
    }
}
