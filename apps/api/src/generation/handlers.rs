//! Axum route handlers for the Resume Version API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::collections::SearchQuery;
use crate::errors::AppError;
use crate::generation::builder::VersionRequest;
use crate::generation::tailoring::TailoredContent;
use crate::generation::versions::{
    create_version, delete_version, duplicate, generate_content, get_version, list_versions,
    open_draft, VersionDraft,
};
use crate::models::resume::ResumeVersion;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub target_role: String,
}

/// POST /api/v1/versions/draft
///
/// Prefills a new version from the pending job analysis, if one was handed off.
/// The handoff is consumed.
pub async fn handle_open_draft(
    State(state): State<AppState>,
) -> Result<Json<VersionDraft>, AppError> {
    Ok(Json(open_draft(&state.storage).await?))
}

/// POST /api/v1/versions/generate
///
/// Suggests tagline, summary and experience selection for a role. Nothing is saved.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<TailoredContent>, AppError> {
    let content =
        generate_content(&state.storage, state.tailor.as_ref(), &request.target_role).await?;
    Ok(Json(content))
}

/// GET /api/v1/versions
pub async fn handle_list_versions(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<ResumeVersion>>, AppError> {
    Ok(Json(list_versions(&state.storage, params.q.as_deref()).await?))
}

/// POST /api/v1/versions
pub async fn handle_create_version(
    State(state): State<AppState>,
    Json(request): Json<VersionRequest>,
) -> Result<(StatusCode, Json<ResumeVersion>), AppError> {
    let version = create_version(&state.storage, request).await?;
    Ok((StatusCode::CREATED, Json(version)))
}

/// GET /api/v1/versions/:id
pub async fn handle_get_version(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeVersion>, AppError> {
    Ok(Json(get_version(&state.storage, &id).await?))
}

/// POST /api/v1/versions/:id/duplicate
pub async fn handle_duplicate_version(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ResumeVersion>), AppError> {
    let copy = duplicate(&state.storage, &id).await?;
    Ok((StatusCode::CREATED, Json(copy)))
}

/// DELETE /api/v1/versions/:id
pub async fn handle_delete_version(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    delete_version(&state.storage, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
