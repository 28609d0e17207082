//! Axum route handlers for the Job Analysis API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::analysis::analyzer::{analyze_job_description, JobInsights};
use crate::analysis::saved::{
    delete_analysis, list_analyses, save_analysis, stage_adhoc_analysis, use_saved_analysis,
    AnalysisRequest,
};
use crate::collections::SearchQuery;
use crate::errors::AppError;
use crate::models::job::JobAnalysis;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub job_description: String,
}

/// POST /api/v1/jobs/analyze
///
/// Runs the keyword analyzer without saving anything.
pub async fn handle_analyze(Json(request): Json<AnalyzeRequest>) -> Result<Json<JobInsights>, AppError> {
    let insights = analyze_job_description(&request.job_description)
        .map_err(|e| AppError::validation(e.to_string()))?;
    Ok(Json(insights))
}

/// GET /api/v1/jobs/analyses
pub async fn handle_list_analyses(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<JobAnalysis>>, AppError> {
    Ok(Json(list_analyses(&state.storage, params.q.as_deref()).await?))
}

/// POST /api/v1/jobs/analyses
pub async fn handle_save_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<(StatusCode, Json<JobAnalysis>), AppError> {
    let analysis = save_analysis(&state.storage, request).await?;
    Ok((StatusCode::CREATED, Json(analysis)))
}

/// DELETE /api/v1/jobs/analyses/:id
pub async fn handle_delete_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    delete_analysis(&state.storage, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/jobs/analyses/:id/use
pub async fn handle_use_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobAnalysis>, AppError> {
    Ok(Json(use_saved_analysis(&state.storage, &id).await?))
}

/// GET /api/v1/jobs/current
///
/// Peeks at the pending handoff without consuming it.
pub async fn handle_get_current(
    State(state): State<AppState>,
) -> Result<Json<Option<JobAnalysis>>, AppError> {
    Ok(Json(state.storage.current_job_analysis().await?))
}

/// PUT /api/v1/jobs/current
pub async fn handle_set_current(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<JobAnalysis>, AppError> {
    Ok(Json(stage_adhoc_analysis(&state.storage, request).await?))
}

/// DELETE /api/v1/jobs/current
pub async fn handle_clear_current(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.storage.clear_current_job_analysis().await?;
    Ok(StatusCode::NO_CONTENT)
}
