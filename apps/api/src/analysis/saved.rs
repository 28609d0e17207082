//! Saved analyses and the "current analysis" handoff to the version builder.

use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::analysis::analyzer::analyze_job_description;
use crate::collections::{filter_by_term, find_by_id, prepend, remove_by_id};
use crate::errors::AppError;
use crate::models::job::JobAnalysis;
use crate::models::new_record_id;
use crate::store::Storage;

/// Id given to an analysis handed to the builder without being saved.
pub const ADHOC_ANALYSIS_ID: &str = "temp";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisRequest {
    pub job_title: String,
    pub company: String,
    pub job_description: String,
    pub notes: String,
}

/// Runs the analyzer over the request's description and assembles a record.
pub fn build_analysis(id: String, request: AnalysisRequest) -> Result<JobAnalysis, AppError> {
    let insights = analyze_job_description(&request.job_description)
        .map_err(|e| AppError::validation(e.to_string()))?;

    Ok(JobAnalysis {
        id,
        job_title: request.job_title,
        company: request.company,
        job_description: request.job_description,
        extracted_role: insights.extracted_role,
        extracted_domain: insights.extracted_domain,
        key_requirements: insights.key_requirements,
        created_date: Utc::now(),
        notes: request.notes,
    })
}

/// Validates, analyzes and prepends a new analysis. Nothing is written on rejection.
pub async fn save_analysis(storage: &Storage, request: AnalysisRequest) -> Result<JobAnalysis, AppError> {
    if request.job_title.trim().is_empty() || request.company.trim().is_empty() {
        return Err(AppError::validation("Job title and company name are required"));
    }

    let analysis = build_analysis(new_record_id(), request)?;

    let mut analyses = storage.job_analyses().await?;
    prepend(&mut analyses, analysis.clone());
    storage.save_job_analyses(&analyses).await?;

    info!(
        "Saved job analysis {} ({} / {})",
        analysis.id, analysis.extracted_role, analysis.extracted_domain
    );
    Ok(analysis)
}

pub async fn list_analyses(storage: &Storage, term: Option<&str>) -> Result<Vec<JobAnalysis>, AppError> {
    let analyses = storage.job_analyses().await?;
    Ok(filter_by_term(&analyses, term))
}

pub async fn delete_analysis(storage: &Storage, id: &str) -> Result<(), AppError> {
    let mut analyses = storage.job_analyses().await?;
    remove_by_id(&mut analyses, id)
        .ok_or_else(|| AppError::not_found(format!("Job analysis {id} not found")))?;
    storage.save_job_analyses(&analyses).await?;
    info!("Deleted job analysis {id}");
    Ok(())
}

/// Hands a saved analysis to the version builder.
pub async fn use_saved_analysis(storage: &Storage, id: &str) -> Result<JobAnalysis, AppError> {
    let analyses = storage.job_analyses().await?;
    let analysis = find_by_id(&analyses, id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("Job analysis {id} not found")))?;
    storage.set_current_job_analysis(&analysis).await?;
    Ok(analysis)
}

/// Analyzes an unsaved posting and hands it to the version builder.
pub async fn stage_adhoc_analysis(
    storage: &Storage,
    request: AnalysisRequest,
) -> Result<JobAnalysis, AppError> {
    let analysis = build_analysis(ADHOC_ANALYSIS_ID.to_string(), request)?;
    storage.set_current_job_analysis(&analysis).await?;
    Ok(analysis)
}

/// Reads and clears the handoff. The builder consumes it exactly once.
pub async fn take_current_analysis(storage: &Storage) -> Result<Option<JobAnalysis>, AppError> {
    let current = storage.current_job_analysis().await?;
    if current.is_some() {
        storage.clear_current_job_analysis().await?;
    }
    Ok(current)
}
