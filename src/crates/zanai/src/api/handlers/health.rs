//! Health check endpoint handlers

use axum::extract::State;
use serde_json::json;

use crate::api::{
    error::{ApiError, ApiResult},
    response,
    routes::AppState,
};

/// Basic health check
///
/// GET /health
pub async fn health(
    State(app_state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    app_state
        .db
        .health_check()
        .await
        .map_err(|e| ApiError::InternalError(format!("Database unavailable: {}", e)))?;

    Ok(response::ok(json!({ "status": "ok" })))
}
