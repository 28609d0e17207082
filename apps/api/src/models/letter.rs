use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetter {
    pub id: String,
    #[serde(default)]
    pub letter_name: String,
    #[serde(default)]
    pub target_role: String,
    #[serde(default)]
    pub target_company: String,
    #[serde(default)]
    pub content: String,
    /// Soft reference to a `ResumeVersion`. Not cleared when that version is deleted.
    #[serde(default)]
    pub resume_version_id: String,
    #[serde(default)]
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub last_modified: DateTime<Utc>,
}
