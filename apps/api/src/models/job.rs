use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Saved keyword analysis of one job posting. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysis {
    pub id: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub extracted_role: String,
    #[serde(default)]
    pub extracted_domain: String,
    #[serde(default)]
    pub key_requirements: Vec<String>,
    #[serde(default)]
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
}
