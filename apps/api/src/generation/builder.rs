//! Resume version builder: validates a version request and snapshots the
//! selected master content into a new `ResumeVersion`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::resume::{CuratedContent, MasterResumeData, ResumeVersion, SyncStatus};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VersionRequest {
    pub version_name: String,
    pub target_role: String,
    pub target_company: String,
    pub tagline: String,
    pub summary: String,
    /// Master experience ids to copy. Order here does not matter.
    pub selected_experiences: Vec<String>,
}

/// Builds a version from `request`. The curated experiences follow master order,
/// and ids that no longer exist in the master are skipped.
pub fn build_version(
    id: String,
    request: VersionRequest,
    master: &MasterResumeData,
    now: DateTime<Utc>,
) -> Result<ResumeVersion, AppError> {
    if request.version_name.trim().is_empty() || request.target_role.trim().is_empty() {
        return Err(AppError::validation(
            "Please provide version name and target role",
        ));
    }

    let selected_experiences: Vec<_> = master
        .work_experiences
        .iter()
        .filter(|e| request.selected_experiences.contains(&e.id))
        .cloned()
        .collect();
    if selected_experiences.is_empty() {
        return Err(AppError::validation(
            "Please select at least one work experience",
        ));
    }

    Ok(ResumeVersion {
        id,
        version_name: request.version_name,
        target_role: request.target_role,
        target_company: request.target_company,
        tagline: request.tagline,
        summary: request.summary,
        curated_content: CuratedContent {
            personal_info: master.personal_info.clone(),
            selected_experiences,
        },
        created_date: now,
        last_modified: now,
        sync_status: SyncStatus::Synced,
    })
}

/// Copy of `source` under a new id, "(Copy)" appended to the name, timestamps reset.
pub fn duplicate_version(source: &ResumeVersion, id: String, now: DateTime<Utc>) -> ResumeVersion {
    ResumeVersion {
        id,
        version_name: format!("{} (Copy)", source.version_name),
        created_date: now,
        last_modified: now,
        ..source.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{PersonalInfo, WorkExperience};
    use chrono::Duration;

    fn experience(id: &str) -> WorkExperience {
        WorkExperience {
            id: id.to_string(),
            company: format!("{id} Corp"),
            position: "Manager".to_string(),
            start_date: "2020-01".to_string(),
            end_date: String::new(),
            description: "Did the work".to_string(),
            tags: vec!["Program Manager".to_string()],
        }
    }

    fn master() -> MasterResumeData {
        MasterResumeData {
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                ..PersonalInfo::default()
            },
            work_experiences: vec![experience("x"), experience("y"), experience("z")],
            ..MasterResumeData::default()
        }
    }

    fn request(selected: &[&str]) -> VersionRequest {
        VersionRequest {
            version_name: "PM - Stripe".to_string(),
            target_role: "Program Manager".to_string(),
            target_company: "Stripe".to_string(),
            tagline: "Cross-Functional Program Expert".to_string(),
            summary: "Summary".to_string(),
            selected_experiences: selected.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_curated_content_follows_master_order() {
        let version = build_version("v1".into(), request(&["z", "x"]), &master(), Utc::now()).unwrap();
        let ids: Vec<_> = version
            .curated_content
            .selected_experiences
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["x", "z"]);
        assert_eq!(version.curated_content.personal_info.full_name, "Ada Lovelace");
        assert_eq!(version.sync_status, SyncStatus::Synced);
        assert_eq!(version.created_date, version.last_modified);
    }

    #[test]
    fn test_snapshot_is_decoupled_from_master() {
        let mut m = master();
        let version = build_version("v1".into(), request(&["y"]), &m, Utc::now()).unwrap();
        m.work_experiences[1].company = "Renamed".to_string();
        m.personal_info.full_name = "Someone Else".to_string();
        assert_eq!(version.curated_content.selected_experiences[0].company, "y Corp");
        assert_eq!(version.curated_content.personal_info.full_name, "Ada Lovelace");
    }

    #[test]
    fn test_empty_selection_rejected() {
        let err = build_version("v1".into(), request(&[]), &master(), Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_unresolvable_selection_rejected() {
        let err = build_version("v1".into(), request(&["gone"]), &master(), Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let version =
            build_version("v1".into(), request(&["gone", "y"]), &master(), Utc::now()).unwrap();
        assert_eq!(version.curated_content.selected_experiences.len(), 1);
    }

    #[test]
    fn test_name_and_role_required() {
        let mut req = request(&["x"]);
        req.version_name = " ".to_string();
        assert!(build_version("v1".into(), req, &master(), Utc::now()).is_err());

        let mut req = request(&["x"]);
        req.target_role.clear();
        assert!(build_version("v1".into(), req, &master(), Utc::now()).is_err());
    }

    #[test]
    fn test_duplicate_changes_only_id_name_and_timestamps() {
        let created = Utc::now() - Duration::days(3);
        let source = build_version("v1".into(), request(&["x", "y"]), &master(), created).unwrap();

        let now = Utc::now();
        let copy = duplicate_version(&source, "v2".into(), now);

        assert_eq!(copy.id, "v2");
        assert_eq!(copy.version_name, "PM - Stripe (Copy)");
        assert_eq!(copy.created_date, now);
        assert_eq!(copy.last_modified, now);
        assert_eq!(copy.target_role, source.target_role);
        assert_eq!(copy.target_company, source.target_company);
        assert_eq!(copy.tagline, source.tagline);
        assert_eq!(copy.summary, source.summary);
        assert_eq!(copy.curated_content, source.curated_content);
        assert_eq!(copy.sync_status, source.sync_status);
    }
}
