//! Stored resume versions: create, list, duplicate, delete, and the draft
//! step that picks up a pending job analysis.

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::analysis::saved::take_current_analysis;
use crate::collections::{filter_by_term, find_by_id, prepend, remove_by_id};
use crate::errors::AppError;
use crate::generation::builder::{build_version, duplicate_version, VersionRequest};
use crate::generation::tailoring::{ContentTailor, TailoredContent};
use crate::models::job::JobAnalysis;
use crate::models::new_record_id;
use crate::models::resume::{MasterResumeData, ResumeVersion};
use crate::store::Storage;

const MISSING_MASTER: &str = "No master resume found. Please create one first.";

/// Starting point for the version builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDraft {
    pub version_name: String,
    pub target_role: String,
    pub target_company: String,
    /// The handed-off analysis this draft was prefilled from, if any.
    pub job_analysis: Option<JobAnalysis>,
    pub master_resume: MasterResumeData,
}

/// The builder refuses to start without a master resume to copy from.
async fn require_master(storage: &Storage) -> Result<MasterResumeData, AppError> {
    storage
        .master_resume()
        .await?
        .ok_or_else(|| AppError::validation(MISSING_MASTER))
}

/// Opens a draft. Consumes the pending analysis handoff, so a second draft
/// starts blank.
pub async fn open_draft(storage: &Storage) -> Result<VersionDraft, AppError> {
    let master_resume = require_master(storage).await?;

    let draft = match take_current_analysis(storage).await? {
        Some(analysis) => VersionDraft {
            version_name: format!("{} - {}", analysis.extracted_role, analysis.company),
            target_role: analysis.extracted_role.clone(),
            target_company: analysis.company.clone(),
            job_analysis: Some(analysis),
            master_resume,
        },
        None => VersionDraft {
            version_name: String::new(),
            target_role: String::new(),
            target_company: String::new(),
            job_analysis: None,
            master_resume,
        },
    };
    Ok(draft)
}

pub async fn generate_content(
    storage: &Storage,
    tailor: &dyn ContentTailor,
    target_role: &str,
) -> Result<TailoredContent, AppError> {
    if target_role.trim().is_empty() {
        return Err(AppError::validation("Please provide target role information"));
    }
    let master = require_master(storage).await?;
    Ok(tailor.tailor(target_role, &master))
}

pub async fn create_version(storage: &Storage, request: VersionRequest) -> Result<ResumeVersion, AppError> {
    let master = require_master(storage).await?;
    let version = build_version(new_record_id(), request, &master, Utc::now())?;

    let mut versions = storage.versions().await?;
    prepend(&mut versions, version.clone());
    storage.save_versions(&versions).await?;

    info!(
        "Created resume version {} '{}' ({} experiences)",
        version.id,
        version.version_name,
        version.curated_content.selected_experiences.len()
    );
    Ok(version)
}

pub async fn list_versions(storage: &Storage, term: Option<&str>) -> Result<Vec<ResumeVersion>, AppError> {
    let versions = storage.versions().await?;
    Ok(filter_by_term(&versions, term))
}

pub async fn get_version(storage: &Storage, id: &str) -> Result<ResumeVersion, AppError> {
    let versions = storage.versions().await?;
    find_by_id(&versions, id)
        .cloned()
        .ok_or_else(|| version_not_found(id))
}

pub async fn duplicate(storage: &Storage, id: &str) -> Result<ResumeVersion, AppError> {
    let mut versions = storage.versions().await?;
    let source = find_by_id(&versions, id).ok_or_else(|| version_not_found(id))?;
    let copy = duplicate_version(source, new_record_id(), Utc::now());

    prepend(&mut versions, copy.clone());
    storage.save_versions(&versions).await?;

    info!("Duplicated resume version {id} as {}", copy.id);
    Ok(copy)
}

/// Removes a version. Cover letters pointing at it keep their dangling id.
pub async fn delete_version(storage: &Storage, id: &str) -> Result<(), AppError> {
    let mut versions = storage.versions().await?;
    remove_by_id(&mut versions, id).ok_or_else(|| version_not_found(id))?;
    storage.save_versions(&versions).await?;
    info!("Deleted resume version {id}");
    Ok(())
}

fn version_not_found(id: &str) -> AppError {
    AppError::not_found(format!("Resume version {id} not found"))
}
