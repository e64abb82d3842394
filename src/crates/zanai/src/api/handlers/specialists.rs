//! Specialist catalog endpoint handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::{
    error::ApiResult,
    models::{CatalogResponse, DownloadResponse, GenerateSpecialistRequest, SpecialistResponse},
    response,
    routes::AppState,
};

/// Full specialist catalog: categories plus seed and generated templates
///
/// GET /api/v1/specialists
pub async fn list_specialists(
    State(app_state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let (categories, templates) = app_state.specialists.catalog().await?;

    Ok(response::ok(CatalogResponse {
        categories,
        templates: templates
            .into_iter()
            .map(SpecialistResponse::from_db_specialist)
            .collect(),
    }))
}

/// Generate a new specialist template
///
/// POST /api/v1/specialists
pub async fn generate_specialist(
    State(app_state): State<AppState>,
    Json(req): Json<GenerateSpecialistRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    req.validate()?;

    let specialist = app_state
        .specialists
        .generate(&req.category, &req.specialty, &req.requirements)
        .await?;

    tracing::info!("Generated specialist: {}", specialist.id);
    Ok(response::created(SpecialistResponse::from_db_specialist(
        specialist,
    )))
}

/// Render a specialist template as a downloadable markdown document
///
/// POST /api/v1/specialists/:id/download
pub async fn download_specialist(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let (specialist, content) = app_state.specialists.download(&id).await?;

    Ok(response::ok(DownloadResponse {
        filename: format!("{}.md", specialist.name),
        content,
    }))
}
