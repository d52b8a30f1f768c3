//! Wire models for the terminal API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
    /// Opaque session key. Omitted or empty on first contact; the server
    /// then allocates one and hands it back in the response.
    #[serde(default)]
    pub session_id: Option<String>,
    pub command: String,
}

#[derive(Debug, Serialize)]
pub struct ExecuteResponse {
    /// Command output with newlines rewritten to `<br>` for the terminal
    /// page. A transport concern, not part of the interpreter contract.
    pub output: String,
    /// Current directory after the command, backslash-rendered.
    pub cwd: String,
    pub status: String,
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub sessions: usize,
    pub uptime_seconds: f64,
    pub requests_handled: u64,
    pub timestamp: String,
}
