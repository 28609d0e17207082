//! Shared list operations for the stored collections (versions, letters, analyses).

use serde::Deserialize;

use crate::models::job::JobAnalysis;
use crate::models::letter::CoverLetter;
use crate::models::resume::ResumeVersion;

/// `?q=` search term accepted by every list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// A record stored in a list collection.
pub trait Record {
    fn id(&self) -> &str;
    /// Fields matched by the list search box.
    fn search_fields(&self) -> [&str; 3];
}

impl Record for ResumeVersion {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.version_name, &self.target_role, &self.target_company]
    }
}

impl Record for CoverLetter {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.letter_name, &self.target_role, &self.target_company]
    }
}

impl Record for JobAnalysis {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.job_title, &self.company, &self.extracted_role]
    }
}

/// Case-insensitive substring filter. `None` or an empty term keeps everything.
pub fn filter_by_term<T: Record + Clone>(records: &[T], term: Option<&str>) -> Vec<T> {
    let term = term.unwrap_or_default().to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
        })
        .cloned()
        .collect()
}

pub fn find_by_id<'a, T: Record>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|r| r.id() == id)
}

/// Removes the record with `id`, preserving the order of the rest.
pub fn remove_by_id<T: Record>(records: &mut Vec<T>, id: &str) -> Option<T> {
    let index = records.iter().position(|r| r.id() == id)?;
    Some(records.remove(index))
}

/// Newest-first insertion; lists are never re-sorted elsewhere.
pub fn prepend<T>(records: &mut Vec<T>, record: T) {
    records.insert(0, record);
}
