//! Axum route handlers for the Cover Letter API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::collections::SearchQuery;
use crate::errors::AppError;
use crate::letters::compose::{
    create_letter, delete_letter, get_letter, list_letters, update_letter, LetterRequest,
};
use crate::models::letter::CoverLetter;
use crate::state::AppState;

/// GET /api/v1/letters
pub async fn handle_list_letters(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<CoverLetter>>, AppError> {
    Ok(Json(list_letters(&state.storage, params.q.as_deref()).await?))
}

/// POST /api/v1/letters
pub async fn handle_create_letter(
    State(state): State<AppState>,
    Json(request): Json<LetterRequest>,
) -> Result<(StatusCode, Json<CoverLetter>), AppError> {
    let letter = create_letter(&state.storage, request).await?;
    Ok((StatusCode::CREATED, Json(letter)))
}

/// GET /api/v1/letters/:id
pub async fn handle_get_letter(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CoverLetter>, AppError> {
    Ok(Json(get_letter(&state.storage, &id).await?))
}

/// PUT /api/v1/letters/:id
pub async fn handle_update_letter(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<LetterRequest>,
) -> Result<Json<CoverLetter>, AppError> {
    Ok(Json(update_letter(&state.storage, &id, request).await?))
}

/// DELETE /api/v1/letters/:id
pub async fn handle_delete_letter(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    delete_letter(&state.storage, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
