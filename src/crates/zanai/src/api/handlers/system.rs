//! System information endpoint handlers

use axum::extract::State;
use serde_json::json;

use crate::api::{error::ApiResult, response, routes::AppState};

/// Service name, version, and provider availability
///
/// GET /api/v1/system/info
pub async fn system_info(
    State(app_state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    Ok(response::ok(json!({
        "name": "zanai-server",
        "version": env!("CARGO_PKG_VERSION"),
        "llm_enabled": app_state.executions.has_model(),
    })))
}
