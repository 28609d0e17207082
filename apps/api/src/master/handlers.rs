//! Axum route handlers for the Master Resume API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::master::editor::{
    add_experience, add_tag, edit_master, master_not_found, remove_experience, remove_tag,
    save_master, update_experience, ExperienceDraft,
};
use crate::models::resume::{MasterResumeData, WorkExperience};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TagRequest {
    pub tag: String,
}

/// GET /api/v1/resumes/master
pub async fn handle_get_master(
    State(state): State<AppState>,
) -> Result<Json<MasterResumeData>, AppError> {
    let master = state
        .storage
        .master_resume()
        .await?
        .ok_or_else(master_not_found)?;
    Ok(Json(master))
}

/// POST /api/v1/resumes/master
///
/// Replaces the stored master resume wholesale.
pub async fn handle_save_master(
    State(state): State<AppState>,
    Json(master): Json<MasterResumeData>,
) -> Result<Json<MasterResumeData>, AppError> {
    Ok(Json(save_master(&state.storage, master).await?))
}

/// POST /api/v1/resumes/master/experiences
pub async fn handle_add_experience(
    State(state): State<AppState>,
    Json(draft): Json<ExperienceDraft>,
) -> Result<(StatusCode, Json<WorkExperience>), AppError> {
    let experience = edit_master(&state.storage, |m| Ok(add_experience(m, draft))).await?;
    Ok((StatusCode::CREATED, Json(experience)))
}

/// PUT /api/v1/resumes/master/experiences/:id
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<ExperienceDraft>,
) -> Result<Json<WorkExperience>, AppError> {
    let experience = edit_master(&state.storage, |m| update_experience(m, &id, draft)).await?;
    Ok(Json(experience))
}

/// DELETE /api/v1/resumes/master/experiences/:id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    edit_master(&state.storage, |m| remove_experience(m, &id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resumes/master/experiences/:id/tags
pub async fn handle_add_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<TagRequest>,
) -> Result<Json<WorkExperience>, AppError> {
    let experience = edit_master(&state.storage, |m| add_tag(m, &id, &req.tag)).await?;
    Ok(Json(experience))
}

/// DELETE /api/v1/resumes/master/experiences/:id/tags?tag=...
///
/// The tag travels in the query so values containing `/` can be removed.
pub async fn handle_remove_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(req): Query<TagRequest>,
) -> Result<Json<WorkExperience>, AppError> {
    let experience = edit_master(&state.storage, |m| remove_tag(m, &id, &req.tag)).await?;
    Ok(Json(experience))
}
