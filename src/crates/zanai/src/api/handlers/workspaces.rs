//! Workspace CRUD endpoint handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::api::{
    error::{ApiError, ApiResult},
    models::{CreateWorkspaceRequest, UpdateWorkspaceRequest, WorkspaceResponse},
    response,
    routes::AppState,
};
use crate::db::repositories::WorkspaceRepository;

/// Create a new workspace
///
/// POST /api/v1/workspaces
pub async fn create_workspace(
    State(app_state): State<AppState>,
    Json(req): Json<CreateWorkspaceRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    req.validate()?;

    let pool = app_state.db.pool();
    let created = WorkspaceRepository::create(
        pool,
        Uuid::new_v4().to_string(),
        req.name,
        req.description.unwrap_or_default(),
    )
    .await?;

    tracing::info!("Created workspace: {}", created.id);
    Ok(response::created(WorkspaceResponse::from_db_workspace(
        created,
    )))
}

/// List all workspaces
///
/// GET /api/v1/workspaces
pub async fn list_workspaces(
    State(app_state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let workspaces = WorkspaceRepository::list(app_state.db.pool()).await?;
    let responses: Vec<WorkspaceResponse> = workspaces
        .into_iter()
        .map(WorkspaceResponse::from_db_workspace)
        .collect();

    Ok(response::ok(responses))
}

/// Get a single workspace by ID
///
/// GET /api/v1/workspaces/:id
pub async fn get_workspace(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let workspace = WorkspaceRepository::get_by_id(app_state.db.pool(), &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Workspace not found: {}", id)))?;

    Ok(response::ok(WorkspaceResponse::from_db_workspace(workspace)))
}

/// Update an existing workspace
///
/// PUT /api/v1/workspaces/:id
pub async fn update_workspace(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateWorkspaceRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    if !req.has_updates() {
        return Err(ApiError::BadRequest("No fields to update".to_string()));
    }

    let pool = app_state.db.pool();
    let existing = WorkspaceRepository::get_by_id(pool, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Workspace not found: {}", id)))?;

    let name = req.name.unwrap_or(existing.name);
    let description = req.description.unwrap_or(existing.description);

    let updated = WorkspaceRepository::update(pool, &id, &name, &description)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Workspace not found: {}", id)))?;

    Ok(response::ok(WorkspaceResponse::from_db_workspace(updated)))
}

/// Delete a workspace
///
/// DELETE /api/v1/workspaces/:id
pub async fn delete_workspace(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();
    WorkspaceRepository::get_by_id(pool, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Workspace not found: {}", id)))?;

    WorkspaceRepository::delete(pool, &id).await?;

    tracing::info!("Deleted workspace: {}", id);
    Ok(response::no_content())
}
