//! Dashboard summary and the fixed label vocabularies.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::analysis::analyzer::{FUNCTIONAL_ROLES, INDUSTRY_DOMAINS};
use crate::errors::AppError;
use crate::state::AppState;
use crate::store::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NextStep {
    MasterResume,
    CreateVersion,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub master_resume_exists: bool,
    pub resume_versions: usize,
    pub cover_letters: usize,
    pub job_analyses: usize,
    pub next_step: NextStep,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxonomy {
    pub functional_roles: &'static [&'static str],
    pub industry_domains: &'static [&'static str],
}

pub async fn dashboard_stats(storage: &Storage) -> Result<DashboardStats, AppError> {
    let master_resume_exists = storage.master_resume().await?.is_some();
    Ok(DashboardStats {
        master_resume_exists,
        resume_versions: storage.versions().await?.len(),
        cover_letters: storage.cover_letters().await?.len(),
        job_analyses: storage.job_analyses().await?.len(),
        next_step: if master_resume_exists {
            NextStep::CreateVersion
        } else {
            NextStep::MasterResume
        },
    })
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, AppError> {
    Ok(Json(dashboard_stats(&state.storage).await?))
}

/// GET /api/v1/taxonomy
pub async fn handle_taxonomy() -> Json<Taxonomy> {
    Json(Taxonomy {
        functional_roles: FUNCTIONAL_ROLES,
        industry_domains: INDUSTRY_DOMAINS,
    })
}
