//! Learning telemetry endpoint handlers

use axum::extract::{Query, State};

use crate::api::{
    error::ApiResult,
    models::{LearningListQuery, LearningResponse},
    response,
    routes::AppState,
};
use crate::db::repositories::LearningRepository;

/// List recent learning records, optionally filtered by agent
///
/// GET /api/v1/learnings
pub async fn list_learnings(
    State(app_state): State<AppState>,
    Query(query): Query<LearningListQuery>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();
    let learnings = match &query.agent_id {
        Some(agent_id) => LearningRepository::list_by_agent(pool, agent_id, 50).await?,
        None => LearningRepository::list_recent(pool, 50).await?,
    };

    let responses: Vec<LearningResponse> = learnings
        .into_iter()
        .map(LearningResponse::from_db_learning)
        .collect();

    Ok(response::ok(responses))
}
