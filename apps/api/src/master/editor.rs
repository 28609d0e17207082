//! Master resume editor: validation and the in-place edits applied before a
//! wholesale save. The stored record is always replaced as a whole.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::new_record_id;
use crate::models::resume::{MasterResumeData, WorkExperience};
use crate::store::Storage;

/// Editable fields of a work experience. The id is assigned by the server.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceDraft {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl ExperienceDraft {
    fn into_experience(self, id: String) -> WorkExperience {
        let mut experience = WorkExperience {
            id,
            company: self.company,
            position: self.position,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            tags: self.tags,
        };
        experience.dedup_tags();
        experience
    }
}

/// Fills blank ids and drops duplicate tags so a saved record upholds its invariants.
pub fn normalize(master: &mut MasterResumeData) {
    for experience in &mut master.work_experiences {
        if experience.id.trim().is_empty() {
            experience.id = new_record_id();
        }
        experience.dedup_tags();
    }
    for education in &mut master.education {
        if education.id.trim().is_empty() {
            education.id = new_record_id();
        }
    }
}

/// Save-time checks: name and email present, at least one experience, unique ids.
pub fn validate(master: &MasterResumeData) -> Result<(), AppError> {
    let info = &master.personal_info;
    if info.full_name.trim().is_empty() || info.email.trim().is_empty() {
        return Err(AppError::validation("Please fill in your name and email"));
    }
    if master.work_experiences.is_empty() {
        return Err(AppError::validation("Please add at least one work experience"));
    }

    let mut seen = HashSet::new();
    if let Some(dup) = master
        .work_experiences
        .iter()
        .find(|e| !seen.insert(e.id.as_str()))
    {
        return Err(AppError::validation(format!(
            "Duplicate work experience id '{}'",
            dup.id
        )));
    }
    Ok(())
}

pub fn prepare_for_save(mut master: MasterResumeData) -> Result<MasterResumeData, AppError> {
    normalize(&mut master);
    validate(&master)?;
    Ok(master)
}

pub fn add_experience(master: &mut MasterResumeData, draft: ExperienceDraft) -> WorkExperience {
    let experience = draft.into_experience(new_record_id());
    master.work_experiences.push(experience.clone());
    experience
}

pub fn update_experience(
    master: &mut MasterResumeData,
    id: &str,
    draft: ExperienceDraft,
) -> Result<WorkExperience, AppError> {
    let slot = master
        .experience_mut(id)
        .ok_or_else(|| experience_not_found(id))?;
    *slot = draft.into_experience(id.to_string());
    Ok(slot.clone())
}

pub fn remove_experience(master: &mut MasterResumeData, id: &str) -> Result<WorkExperience, AppError> {
    let index = master
        .work_experiences
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| experience_not_found(id))?;
    Ok(master.work_experiences.remove(index))
}

pub fn add_tag(master: &mut MasterResumeData, id: &str, tag: &str) -> Result<WorkExperience, AppError> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(AppError::validation("Tag cannot be empty"));
    }
    let experience = master
        .experience_mut(id)
        .ok_or_else(|| experience_not_found(id))?;
    experience.add_tag(tag);
    Ok(experience.clone())
}

pub fn remove_tag(master: &mut MasterResumeData, id: &str, tag: &str) -> Result<WorkExperience, AppError> {
    let tag = tag.trim();
    let experience = master
        .experience_mut(id)
        .ok_or_else(|| experience_not_found(id))?;
    experience.remove_tag(tag);
    Ok(experience.clone())
}

fn experience_not_found(id: &str) -> AppError {
    AppError::not_found(format!("Work experience {id} not found"))
}

pub fn master_not_found() -> AppError {
    AppError::not_found("No master resume found. Please create one first.")
}

// ────────────────────────────────────────────────────────────────────────────
// Persistence
// ────────────────────────────────────────────────────────────────────────────

/// Validates and overwrites the stored master resume.
pub async fn save_master(storage: &Storage, master: MasterResumeData) -> Result<MasterResumeData, AppError> {
    let master = prepare_for_save(master)?;
    storage.save_master_resume(&master).await?;
    info!(
        "Saved master resume ({} experiences)",
        master.work_experiences.len()
    );
    Ok(master)
}

/// Loads the stored master, applies `edit`, and saves the result wholesale.
/// Nothing is written if the edit or the save-time validation fails.
pub async fn edit_master<T>(
    storage: &Storage,
    edit: impl FnOnce(&mut MasterResumeData) -> Result<T, AppError>,
) -> Result<T, AppError> {
    let mut master = storage.master_resume().await?.ok_or_else(master_not_found)?;
    let outcome = edit(&mut master)?;
    save_master(storage, master).await?;
    Ok(outcome)
}
