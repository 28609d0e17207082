use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact block shown at the top of every resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

/// A single position held. Tags are functional-role or industry-domain labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub start_date: String,
    /// Empty means the position is current.
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl WorkExperience {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Adds `tag` unless already present. Returns whether the tag list changed.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        if self.has_tag(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Removes every exact match of `tag`. Returns whether the tag list changed.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Drops repeated tags, keeping the first occurrence of each.
    pub fn dedup_tags(&mut self) {
        let mut seen = Vec::with_capacity(self.tags.len());
        self.tags.retain(|t| {
            if seen.contains(t) {
                false
            } else {
                seen.push(t.clone());
                true
            }
        });
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub graduation_date: String,
}

/// The single canonical resume every version is derived from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterResumeData {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub work_experiences: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl MasterResumeData {
    pub fn experience_mut(&mut self, id: &str) -> Option<&mut WorkExperience> {
        self.work_experiences.iter_mut().find(|e| e.id == id)
    }

    /// Experiences carrying exactly `tag`, in master order.
    pub fn experiences_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a WorkExperience> {
        self.work_experiences.iter().filter(move |e| e.has_tag(tag))
    }
}

/// Declared drift state of a version relative to the master resume.
/// Versions are created `Synced`; nothing transitions them yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    #[default]
    Synced,
    Outdated,
    Orphaned,
}

/// Value snapshot of master content taken when a version is saved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedContent {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub selected_experiences: Vec<WorkExperience>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeVersion {
    pub id: String,
    #[serde(default)]
    pub version_name: String,
    #[serde(default)]
    pub target_role: String,
    #[serde(default)]
    pub target_company: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub curated_content: CuratedContent,
    #[serde(default)]
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub last_modified: DateTime<Utc>,
    #[serde(default)]
    pub sync_status: SyncStatus,
}
