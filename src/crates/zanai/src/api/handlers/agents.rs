//! Agent CRUD endpoint handlers
//!
//! Includes the archive toggle and the export document endpoint on top of
//! the standard CRUD operations.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::api::{
    error::{ApiError, ApiResult},
    models::{
        AgentExportResponse, AgentListQuery, AgentResponse, CreateAgentRequest, ExportMetadata,
        ExportWorkspace, UpdateAgentRequest,
    },
    response,
    routes::AppState,
};
use crate::db::models::Agent;
use crate::db::repositories::{AgentRepository, WorkspaceRepository};

/// Create a new agent
///
/// POST /api/v1/agents
pub async fn create_agent(
    State(app_state): State<AppState>,
    Json(req): Json<CreateAgentRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    req.validate()?;

    let pool = app_state.db.pool();
    WorkspaceRepository::get_by_id(pool, &req.workspace_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Workspace not found: {}", req.workspace_id))
        })?;

    let mut agent = Agent::new(Uuid::new_v4().to_string(), req.name, req.workspace_id);
    if let Some(description) = req.description {
        agent = agent.with_description(description);
    }
    if let Some(agent_type) = req.agent_type {
        agent = agent.with_type(agent_type);
    }
    if let Some(config) = req.config {
        agent = agent.with_config(config);
    }
    if let Some(knowledge) = req.knowledge {
        agent = agent.with_knowledge(knowledge);
    }
    if let Some(status) = req.status {
        agent.status = status;
    }

    let created = AgentRepository::create(pool, &agent).await?;

    tracing::info!("Created agent: {}", created.id);
    Ok(response::created(AgentResponse::from_db_agent(created)))
}

/// List agents with optional workspace and status filters
///
/// GET /api/v1/agents
pub async fn list_agents(
    State(app_state): State<AppState>,
    Query(query): Query<AgentListQuery>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();
    let agents = match &query.workspace_id {
        Some(workspace_id) => AgentRepository::list_by_workspace(pool, workspace_id).await?,
        None => AgentRepository::list(pool).await?,
    };

    let responses: Vec<AgentResponse> = agents
        .into_iter()
        .filter(|a| query.status.as_ref().map_or(true, |s| a.status == *s))
        .map(AgentResponse::from_db_agent)
        .collect();

    Ok(response::ok(responses))
}

/// Get a single agent by ID
///
/// GET /api/v1/agents/:id
pub async fn get_agent(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let agent = AgentRepository::get_by_id(app_state.db.pool(), &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Agent not found: {}", id)))?;

    Ok(response::ok(AgentResponse::from_db_agent(agent)))
}

/// Update an existing agent
///
/// PUT /api/v1/agents/:id
pub async fn update_agent(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateAgentRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    req.validate()?;
    if !req.has_updates() {
        return Err(ApiError::BadRequest("No fields to update".to_string()));
    }

    let pool = app_state.db.pool();
    let mut agent = AgentRepository::get_by_id(pool, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Agent not found: {}", id)))?;

    if let Some(workspace_id) = &req.workspace_id {
        WorkspaceRepository::get_by_id(pool, workspace_id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Workspace not found: {}", workspace_id))
            })?;
    }

    if let Some(name) = req.name {
        agent.name = name;
    }
    if let Some(description) = req.description {
        agent.description = description;
    }
    if let Some(agent_type) = req.agent_type {
        agent.agent_type = agent_type;
    }
    if let Some(config) = req.config {
        agent.config = config;
    }
    if let Some(knowledge) = req.knowledge {
        agent.knowledge = knowledge;
    }
    if let Some(status) = req.status {
        agent.status = status;
    }
    if let Some(workspace_id) = req.workspace_id {
        agent.workspace_id = workspace_id;
    }

    let updated = AgentRepository::update(pool, &agent).await?;

    Ok(response::ok(AgentResponse::from_db_agent(updated)))
}

/// Toggle an agent between active and inactive
///
/// PATCH /api/v1/agents/:id/archive
pub async fn archive_agent(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();
    let agent = AgentRepository::get_by_id(pool, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Agent not found: {}", id)))?;

    let new_status = if agent.is_archived() {
        "active"
    } else {
        "inactive"
    };
    AgentRepository::update_status(pool, &id, new_status).await?;

    let updated = AgentRepository::get_by_id(pool, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Agent not found: {}", id)))?;

    tracing::info!("Agent {} status toggled to {}", id, new_status);
    Ok(response::ok(AgentResponse::from_db_agent(updated)))
}

/// Export an agent as a self-contained document
///
/// GET /api/v1/agents/:id/export
pub async fn export_agent(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();
    let agent = AgentRepository::get_by_id(pool, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Agent not found: {}", id)))?;

    let workspace = WorkspaceRepository::get_by_id(pool, &agent.workspace_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Workspace not found: {}", agent.workspace_id))
        })?;

    let export = AgentExportResponse {
        metadata: ExportMetadata {
            version: "1.0".to_string(),
            exported_at: chrono::Utc::now().to_rfc3339(),
            agent_id: agent.id.clone(),
            agent_name: agent.name.clone(),
        },
        agent: AgentResponse::from_db_agent(agent),
        workspace: ExportWorkspace {
            name: workspace.name,
            description: workspace.description,
        },
    };

    Ok(response::ok(export))
}

/// Delete an agent
///
/// DELETE /api/v1/agents/:id
pub async fn delete_agent(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();
    AgentRepository::get_by_id(pool, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Agent not found: {}", id)))?;

    AgentRepository::delete(pool, &id).await?;

    tracing::info!("Deleted agent: {}", id);
    Ok(response::no_content())
}
