//! Stored cover letters.

use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::collections::{filter_by_term, find_by_id, prepend, remove_by_id};
use crate::errors::AppError;
use crate::models::letter::CoverLetter;
use crate::models::new_record_id;
use crate::store::Storage;

/// Editable fields of a cover letter, used for both create and update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LetterRequest {
    pub letter_name: String,
    pub target_role: String,
    pub target_company: String,
    pub content: String,
    pub resume_version_id: String,
}

impl LetterRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.letter_name.trim().is_empty() || self.content.trim().is_empty() {
            return Err(AppError::validation(
                "Please provide a letter name and content",
            ));
        }
        Ok(())
    }

    fn apply_to(self, letter: &mut CoverLetter) {
        letter.letter_name = self.letter_name;
        letter.target_role = self.target_role;
        letter.target_company = self.target_company;
        letter.content = self.content;
        letter.resume_version_id = self.resume_version_id;
    }
}

pub async fn create_letter(storage: &Storage, request: LetterRequest) -> Result<CoverLetter, AppError> {
    request.validate()?;

    let now = Utc::now();
    let mut letter = CoverLetter {
        id: new_record_id(),
        letter_name: String::new(),
        target_role: String::new(),
        target_company: String::new(),
        content: String::new(),
        resume_version_id: String::new(),
        created_date: now,
        last_modified: now,
    };
    request.apply_to(&mut letter);

    let mut letters = storage.cover_letters().await?;
    prepend(&mut letters, letter.clone());
    storage.save_cover_letters(&letters).await?;

    info!("Created cover letter {} '{}'", letter.id, letter.letter_name);
    Ok(letter)
}

/// Replaces the editable fields and bumps `lastModified`. Id and creation date are kept.
pub async fn update_letter(
    storage: &Storage,
    id: &str,
    request: LetterRequest,
) -> Result<CoverLetter, AppError> {
    request.validate()?;

    let mut letters = storage.cover_letters().await?;
    let letter = letters
        .iter_mut()
        .find(|l| l.id == id)
        .ok_or_else(|| letter_not_found(id))?;
    request.apply_to(letter);
    letter.last_modified = Utc::now();
    let updated = letter.clone();

    storage.save_cover_letters(&letters).await?;
    info!("Updated cover letter {id}");
    Ok(updated)
}

pub async fn list_letters(storage: &Storage, term: Option<&str>) -> Result<Vec<CoverLetter>, AppError> {
    let letters = storage.cover_letters().await?;
    Ok(filter_by_term(&letters, term))
}

pub async fn get_letter(storage: &Storage, id: &str) -> Result<CoverLetter, AppError> {
    let letters = storage.cover_letters().await?;
    find_by_id(&letters, id)
        .cloned()
        .ok_or_else(|| letter_not_found(id))
}

pub async fn delete_letter(storage: &Storage, id: &str) -> Result<(), AppError> {
    let mut letters = storage.cover_letters().await?;
    remove_by_id(&mut letters, id).ok_or_else(|| letter_not_found(id))?;
    storage.save_cover_letters(&letters).await?;
    info!("Deleted cover letter {id}");
    Ok(())
}

fn letter_not_found(id: &str) -> AppError {
    AppError::not_found(format!("Cover letter {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::store::StorageKeys;
    use std::sync::Arc;

    fn storage() -> Storage {
        Storage::new(Arc::new(MemoryStore::new()), StorageKeys::default())
    }

    fn request(name: &str, company: &str) -> LetterRequest {
        LetterRequest {
            letter_name: name.to_string(),
            target_role: "Program Manager".to_string(),
            target_company: company.to_string(),
            content: "Dear hiring manager,".to_string(),
            resume_version_id: "v-1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_prepends() {
        let storage = storage();
        let first = create_letter(&storage, request("First", "Acme")).await.unwrap();
        let second = create_letter(&storage, request("Second", "Acme")).await.unwrap();

        let stored = storage.cover_letters().await.unwrap();
        assert_eq!(stored, vec![second, first]);
    }

    #[tokio::test]
    async fn test_name_and_content_required() {
        let storage = storage();
        let mut req = request("", "Acme");
        assert!(matches!(
            create_letter(&storage, req.clone()).await,
            Err(AppError::Validation(_))
        ));
        req.letter_name = "Named".to_string();
        req.content = "  ".to_string();
        assert!(matches!(
            create_letter(&storage, req).await,
            Err(AppError::Validation(_))
        ));
        assert!(storage.cover_letters().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_identity() {
        let storage = storage();
        let created = create_letter(&storage, request("Draft", "Acme")).await.unwrap();

        let mut edit = request("Final", "Acme");
        edit.content = "Dear Acme team,".to_string();
        let updated = update_letter(&storage, &created.id, edit).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_date, created.created_date);
        assert!(updated.last_modified >= created.last_modified);
        assert_eq!(get_letter(&storage, &created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let storage = storage();
        let err = update_letter(&storage, "nope", request("X", "Y"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_and_filter() {
        let storage = storage();
        let a = create_letter(&storage, request("Alpha", "Acme")).await.unwrap();
        create_letter(&storage, request("Beta", "Globex")).await.unwrap();

        assert_eq!(list_letters(&storage, Some("globex")).await.unwrap().len(), 1);
        assert_eq!(list_letters(&storage, Some("")).await.unwrap().len(), 2);

        delete_letter(&storage, &a.id).await.unwrap();
        assert!(matches!(
            get_letter(&storage, &a.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            delete_letter(&storage, &a.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
