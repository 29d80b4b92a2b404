use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::directory::load_directory;
use crate::errors::AppError;
use crate::state::AppState;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token.is_empty() || token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct ReloadResponse {
    doctors: usize,
}

// POST /api/admin/directory/reload
pub async fn reload_directory(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ReloadResponse>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let doctors = load_directory(&state.config.doctors_path).map_err(|e| {
        tracing::error!(error = %e, "failed to reload doctor directory");
        AppError::Directory(format!("{e:#}"))
    })?;

    let count = doctors.len();
    state.directory.replace(doctors);
    tracing::info!(count, "doctor directory reloaded");

    Ok(Json(ReloadResponse { doctors: count }))
}
