//! HTTP API handlers.
//!
//! Every handler answers HTTP 200. Failures are encoded in the response
//! body (CV error text, projects sentinel), never as an error status.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use tracing::error;

use crate::config::Config;
use crate::cv;
use crate::github::{GithubClient, ProjectSummary};
use crate::status::{MissionLog, StatusReport};

/// Application state shared with handlers.
///
/// Read-only after construction; handlers clone it freely and never
/// mutate it, so no locking is needed.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client for the GitHub projects proxy.
    pub github: GithubClient,
    /// Path to the bundled CV file.
    pub cv_path: Arc<PathBuf>,
}

impl AppState {
    /// Build app state from config.
    pub fn new(config: &Config) -> Self {
        Self {
            github: GithubClient::new(config),
            cv_path: Arc::new(PathBuf::from(&config.cv_path)),
        }
    }
}

/// System status handler. Fresh timestamp and load on every call.
pub async fn system_status() -> impl IntoResponse {
    Json(StatusReport::generate())
}

/// Mission log handler. Constant payload.
pub async fn mission_log() -> impl IntoResponse {
    Json(MissionLog::current())
}

/// CV handler. Serves the bundled text file, or an in-band error string.
pub async fn cv_content(State(state): State<AppState>) -> impl IntoResponse {
    let body = cv::load_cv(&state.cv_path).await;

    ([(header::CONTENT_TYPE, "text/plain;charset=UTF-8")], body)
}

/// Projects handler. Proxies the GitHub repository list.
///
/// Any upstream failure collapses to the one-element sentinel list; the
/// cause is logged server-side only.
pub async fn github_projects(State(state): State<AppState>) -> impl IntoResponse {
    let projects = match state.github.fetch_projects().await {
        Ok(projects) => projects,
        Err(e) => {
            error!(error = %e, "Failed to fetch GitHub projects");
            vec![ProjectSummary::error_sentinel()]
        }
    };

    Json(projects)
}
