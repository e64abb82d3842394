//! Composition CRUD and execution endpoint handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::api::{
    error::{ApiError, ApiResult},
    models::{
        CompositionListQuery, CompositionResponse, CreateCompositionRequest,
        ExecuteCompositionRequest, UpdateCompositionRequest,
    },
    response,
    routes::AppState,
};
use crate::db::connection::DatabasePool;
use crate::db::models::Composition;
use crate::db::repositories::{AgentRepository, CompositionRepository, WorkspaceRepository};

async fn ensure_agents_exist(pool: &DatabasePool, agent_ids: &[String]) -> ApiResult<()> {
    for agent_id in agent_ids {
        AgentRepository::get_by_id(pool, agent_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Agent not found: {}", agent_id)))?;
    }
    Ok(())
}

/// Create a new composition with its ordered member agents
///
/// POST /api/v1/compositions
pub async fn create_composition(
    State(app_state): State<AppState>,
    Json(req): Json<CreateCompositionRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    req.validate()?;

    let pool = app_state.db.pool();
    WorkspaceRepository::get_by_id(pool, &req.workspace_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Workspace not found: {}", req.workspace_id))
        })?;

    let agent_ids = req.agent_ids.unwrap_or_default();
    ensure_agents_exist(pool, &agent_ids).await?;

    let mut composition =
        Composition::new(Uuid::new_v4().to_string(), req.name, req.workspace_id);
    if let Some(description) = req.description {
        composition.description = description;
    }
    if let Some(status) = req.status {
        composition.status = status;
    }

    let created = CompositionRepository::create(pool, &composition, &agent_ids).await?;
    let members = CompositionRepository::members(pool, &created.id).await?;

    tracing::info!("Created composition: {}", created.id);
    Ok(response::created(CompositionResponse::from_db_composition(
        created, members,
    )))
}

/// List compositions with an optional workspace filter
///
/// GET /api/v1/compositions
pub async fn list_compositions(
    State(app_state): State<AppState>,
    Query(query): Query<CompositionListQuery>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();
    let compositions = match &query.workspace_id {
        Some(workspace_id) => {
            CompositionRepository::list_by_workspace(pool, workspace_id).await?
        }
        None => CompositionRepository::list(pool).await?,
    };

    let mut responses = Vec::with_capacity(compositions.len());
    for composition in compositions {
        let members = CompositionRepository::members(pool, &composition.id).await?;
        responses.push(CompositionResponse::from_db_composition(composition, members));
    }

    Ok(response::ok(responses))
}

/// Get a single composition by ID
///
/// GET /api/v1/compositions/:id
pub async fn get_composition(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();
    let composition = CompositionRepository::get_by_id(pool, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Composition not found: {}", id)))?;
    let members = CompositionRepository::members(pool, &id).await?;

    Ok(response::ok(CompositionResponse::from_db_composition(
        composition,
        members,
    )))
}

/// Update an existing composition, optionally replacing its member list
///
/// PUT /api/v1/compositions/:id
pub async fn update_composition(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCompositionRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    req.validate()?;
    if !req.has_updates() {
        return Err(ApiError::BadRequest("No fields to update".to_string()));
    }

    let pool = app_state.db.pool();
    let mut composition = CompositionRepository::get_by_id(pool, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Composition not found: {}", id)))?;

    if let Some(workspace_id) = &req.workspace_id {
        WorkspaceRepository::get_by_id(pool, workspace_id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Workspace not found: {}", workspace_id))
            })?;
    }

    if let Some(name) = req.name {
        composition.name = name;
    }
    if let Some(description) = req.description {
        composition.description = description;
    }
    if let Some(status) = req.status {
        composition.status = status;
    }
    if let Some(workspace_id) = req.workspace_id {
        composition.workspace_id = workspace_id;
    }

    let updated = CompositionRepository::update(pool, &composition).await?;

    if let Some(agent_ids) = &req.agent_ids {
        ensure_agents_exist(pool, agent_ids).await?;
        CompositionRepository::set_members(pool, &id, agent_ids).await?;
    }

    let members = CompositionRepository::members(pool, &id).await?;
    Ok(response::ok(CompositionResponse::from_db_composition(
        updated, members,
    )))
}

/// Toggle a composition between active and inactive
///
/// PATCH /api/v1/compositions/:id/archive
pub async fn archive_composition(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();
    let composition = CompositionRepository::get_by_id(pool, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Composition not found: {}", id)))?;

    let new_status = if composition.status == "inactive" {
        "active"
    } else {
        "inactive"
    };
    CompositionRepository::update_status(pool, &id, new_status).await?;

    let updated = CompositionRepository::get_by_id(pool, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Composition not found: {}", id)))?;
    let members = CompositionRepository::members(pool, &id).await?;

    tracing::info!("Composition {} status toggled to {}", id, new_status);
    Ok(response::ok(CompositionResponse::from_db_composition(
        updated, members,
    )))
}

/// Execute a composition's member agents in order
///
/// POST /api/v1/compositions/:id/execute
pub async fn execute_composition(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ExecuteCompositionRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    req.validate()?;

    let report = app_state.executions.run_composition(&id, &req.input).await?;
    Ok(response::ok(report))
}

/// Delete a composition
///
/// DELETE /api/v1/compositions/:id
pub async fn delete_composition(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();
    CompositionRepository::get_by_id(pool, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Composition not found: {}", id)))?;

    CompositionRepository::delete(pool, &id).await?;

    tracing::info!("Deleted composition: {}", id);
    Ok(response::no_content())
}
