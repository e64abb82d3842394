//! Execution endpoint handlers
//!
//! Starting an execution returns the running record immediately (202); the
//! run itself proceeds on a background task. A DELETE on a running execution
//! stops it: the status flips to failed while any in-flight completion call
//! continues unaffected.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::api::{
    error::{ApiError, ApiResult},
    models::{ExecutionListQuery, ExecutionResponse, StartExecutionRequest},
    response,
    routes::AppState,
};
use crate::db::repositories::ExecutionRepository;

/// Start an agent execution
///
/// POST /api/v1/executions
pub async fn start_execution(
    State(app_state): State<AppState>,
    Json(req): Json<StartExecutionRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    req.validate()?;

    let context = req.context.as_ref().map(|value| value.to_string());
    let execution = app_state
        .executions
        .start_agent(&req.agent_id, req.input, context)
        .await?;

    Ok(response::accepted(ExecutionResponse::from_db_execution(
        execution,
    )))
}

/// List recent executions, optionally filtered by agent
///
/// GET /api/v1/executions
pub async fn list_executions(
    State(app_state): State<AppState>,
    Query(query): Query<ExecutionListQuery>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();
    let executions = match &query.agent_id {
        Some(agent_id) => ExecutionRepository::list_by_agent(pool, agent_id, 50).await?,
        None => ExecutionRepository::list_recent(pool, 20).await?,
    };

    let responses: Vec<ExecutionResponse> = executions
        .into_iter()
        .map(ExecutionResponse::from_db_execution)
        .collect();

    Ok(response::ok(responses))
}

/// Get a single execution by ID
///
/// GET /api/v1/executions/:id
pub async fn get_execution(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let execution = ExecutionRepository::get_by_id(app_state.db.pool(), &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Execution not found: {}", id)))?;

    Ok(response::ok(ExecutionResponse::from_db_execution(execution)))
}

/// Stop a running execution
///
/// DELETE /api/v1/executions/:id
pub async fn stop_execution(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let stopped = app_state.executions.stop(&id).await?;

    tracing::info!("Stopped execution: {}", id);
    Ok(response::ok(ExecutionResponse::from_db_execution(stopped)))
}
