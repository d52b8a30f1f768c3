//! HTTP route handlers.

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use tracing::info;
use uuid::Uuid;
use webcmd_core::shell::path::to_windows_display;
use webcmd_core::COMMAND_NOT_FOUND;

use crate::http::{
    models::{ExecuteRequest, ExecuteResponse, HealthResponse},
    state::AppState,
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(terminal_page))
        .route("/api/v1/execute", post(execute_handler))
        .route("/health", get(health_handler))
        .route("/api/v1/shutdown", post(shutdown_handler))
        .with_state(state)
}

/// GET / - the embedded terminal front end
async fn terminal_page() -> Html<&'static str> {
    Html(include_str!("../../assets/terminal.html"))
}

/// POST /api/v1/execute - run one command line for a session
async fn execute_handler(
    State(state): State<AppState>,
    Json(req): Json<ExecuteRequest>,
) -> Json<ExecuteResponse> {
    {
        let mut stats = state.stats.write().unwrap();
        stats.increment_request();
    }

    let session_id = req
        .session_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    if req.command.trim().is_empty() {
        let cwd = state.sessions.current_dir(&session_id);
        return Json(ExecuteResponse {
            output: COMMAND_NOT_FOUND.to_string(),
            cwd: to_windows_display(&cwd),
            status: "error".into(),
            session_id,
        });
    }

    let result = state
        .interpreter
        .dispatch(&state.sessions, &session_id, &req.command)
        .await;

    info!(session = %session_id, command = %req.command, "command executed");
    Json(ExecuteResponse {
        output: html_line_breaks(&result.text),
        cwd: to_windows_display(&result.cwd),
        status: "success".into(),
        session_id,
    })
}

/// GET /health - health check
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.stats.read().unwrap();

    Json(HealthResponse {
        status: "healthy".into(),
        sessions: state.sessions.session_count(),
        uptime_seconds: stats.uptime_seconds(),
        requests_handled: stats.requests_total,
        timestamp: Local::now().to_rfc3339(),
    })
}

/// POST /api/v1/shutdown - trigger graceful shutdown
async fn shutdown_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let _ = state.shutdown_tx.send(());

    Json(serde_json::json!({
        "success": true,
        "message": "Shutdown signal sent"
    }))
}

/// The terminal page renders output as HTML, so newlines become `<br>`.
fn html_line_breaks(text: &str) -> String {
    text.replace("\r\n", "<br>").replace('\n', "<br>")
}
