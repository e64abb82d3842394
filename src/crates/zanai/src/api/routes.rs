//! API route definitions
//!
//! Defines all API routes and their associated handler functions.

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::api::{handlers, middleware::cors};
use crate::db::DatabaseConnection;
use crate::execution::ExecutionService;
use crate::specialist::SpecialistService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub executions: ExecutionService,
    pub specialists: SpecialistService,
}

/// Build the complete API router
pub fn create_router(
    db: DatabaseConnection,
    executions: ExecutionService,
    specialists: SpecialistService,
) -> Router {
    let app_state = AppState {
        db,
        executions,
        specialists,
    };

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Workspace endpoints
        .route(
            "/api/v1/workspaces",
            post(handlers::create_workspace).get(handlers::list_workspaces),
        )
        .route(
            "/api/v1/workspaces/:id",
            get(handlers::get_workspace)
                .put(handlers::update_workspace)
                .delete(handlers::delete_workspace),
        )
        // Agent endpoints
        .route(
            "/api/v1/agents",
            post(handlers::create_agent).get(handlers::list_agents),
        )
        .route(
            "/api/v1/agents/:id",
            get(handlers::get_agent)
                .put(handlers::update_agent)
                .delete(handlers::delete_agent),
        )
        .route("/api/v1/agents/:id/archive", patch(handlers::archive_agent))
        .route("/api/v1/agents/:id/export", get(handlers::export_agent))
        // Composition endpoints
        .route(
            "/api/v1/compositions",
            post(handlers::create_composition).get(handlers::list_compositions),
        )
        .route(
            "/api/v1/compositions/:id",
            get(handlers::get_composition)
                .put(handlers::update_composition)
                .delete(handlers::delete_composition),
        )
        .route(
            "/api/v1/compositions/:id/archive",
            patch(handlers::archive_composition),
        )
        .route(
            "/api/v1/compositions/:id/execute",
            post(handlers::execute_composition),
        )
        // Execution endpoints
        .route(
            "/api/v1/executions",
            post(handlers::start_execution).get(handlers::list_executions),
        )
        .route(
            "/api/v1/executions/:id",
            get(handlers::get_execution).delete(handlers::stop_execution),
        )
        // Specialist endpoints
        .route(
            "/api/v1/specialists",
            get(handlers::list_specialists).post(handlers::generate_specialist),
        )
        .route(
            "/api/v1/specialists/:id/download",
            post(handlers::download_specialist),
        )
        // Learning telemetry
        .route("/api/v1/learnings", get(handlers::list_learnings))
        // System endpoints
        .route("/api/v1/system/info", get(handlers::system_info))
        .layer(TraceLayer::new_for_http())
        .layer(cors::cors_layer())
        .with_state(app_state)
}
