//! Persistent store adapter: typed JSON documents over a pluggable key-value backend.
//!
//! Every collection lives under one fixed key and is rewritten wholesale on each
//! mutation. There is no locking: concurrent writers race and the last one wins.

pub mod file;
pub mod memory;
pub mod postgres;
pub mod redis_store;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{Config, StoreBackend};
use crate::models::job::JobAnalysis;
use crate::models::letter::CoverLetter;
use crate::models::resume::{MasterResumeData, ResumeVersion};

pub const DEFAULT_NAMESPACE: &str = "resumepivot";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] ::redis::RedisError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Raw string key-value backend. Implement this to add a storage engine
/// without touching handlers or the typed adapter.
///
/// Carried in `Storage` as `Arc<dyn KeyValueStore>`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
    fn backend_name(&self) -> &'static str;
}

/// The fixed keys each collection is stored under.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageKeys {
    pub master_resume: String,
    pub versions: String,
    pub cover_letters: String,
    pub job_analyses: String,
    /// Transient handoff from the analyzer flow to the version builder.
    pub current_job_analysis: String,
}

impl StorageKeys {
    pub fn new(namespace: &str) -> Self {
        Self {
            master_resume: format!("{namespace}_master_resume"),
            versions: format!("{namespace}_versions"),
            cover_letters: format!("{namespace}_cover_letters"),
            job_analyses: format!("{namespace}_job_analyses"),
            current_job_analysis: format!("{namespace}_current_job_analysis"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

/// Typed view over a `KeyValueStore`.
///
/// Missing keys read as the empty default. Stored values that fail to parse
/// are logged and also treated as absent; the data is a local convenience
/// cache, not a system of record.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl Storage {
    pub fn new(backend: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self { backend, keys }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.backend_name()
    }

    pub async fn read_record<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.backend.get(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str::<T>(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, error = %e, "Ignoring malformed stored value");
                Ok(None)
            }
        }
    }

    pub async fn read_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        Ok(self.read_record::<Vec<T>>(key).await?.unwrap_or_default())
    }

    pub async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, raw).await
    }

    pub async fn clear(&self, key: &str) -> Result<(), StoreError> {
        self.backend.remove(key).await
    }

    // ── Collection accessors ───────────────────────────────────────────────

    pub async fn master_resume(&self) -> Result<Option<MasterResumeData>, StoreError> {
        self.read_record(&self.keys.master_resume).await
    }

    pub async fn save_master_resume(&self, master: &MasterResumeData) -> Result<(), StoreError> {
        self.write(&self.keys.master_resume, master).await
    }

    pub async fn versions(&self) -> Result<Vec<ResumeVersion>, StoreError> {
        self.read_list(&self.keys.versions).await
    }

    pub async fn save_versions(&self, versions: &[ResumeVersion]) -> Result<(), StoreError> {
        self.write(&self.keys.versions, versions).await
    }

    pub async fn cover_letters(&self) -> Result<Vec<CoverLetter>, StoreError> {
        self.read_list(&self.keys.cover_letters).await
    }

    pub async fn save_cover_letters(&self, letters: &[CoverLetter]) -> Result<(), StoreError> {
        self.write(&self.keys.cover_letters, letters).await
    }

    pub async fn job_analyses(&self) -> Result<Vec<JobAnalysis>, StoreError> {
        self.read_list(&self.keys.job_analyses).await
    }

    pub async fn save_job_analyses(&self, analyses: &[JobAnalysis]) -> Result<(), StoreError> {
        self.write(&self.keys.job_analyses, analyses).await
    }

    pub async fn current_job_analysis(&self) -> Result<Option<JobAnalysis>, StoreError> {
        self.read_record(&self.keys.current_job_analysis).await
    }

    pub async fn set_current_job_analysis(&self, analysis: &JobAnalysis) -> Result<(), StoreError> {
        self.write(&self.keys.current_job_analysis, analysis).await
    }

    pub async fn clear_current_job_analysis(&self) -> Result<(), StoreError> {
        self.clear(&self.keys.current_job_analysis).await
    }
}

/// Connects the backend selected in config and wraps it in a `Storage`.
pub async fn connect(config: &Config) -> Result<Storage> {
    let backend: Arc<dyn KeyValueStore> = match &config.store_backend {
        StoreBackend::Memory => Arc::new(memory::MemoryStore::new()),
        StoreBackend::File { data_dir } => Arc::new(file::FileStore::open(data_dir).await?),
        StoreBackend::Redis { url } => Arc::new(redis_store::RedisStore::connect(url).await?),
        StoreBackend::Postgres { url } => Arc::new(postgres::PostgresStore::connect(url).await?),
    };
    info!(
        "Store backend '{}' ready (namespace: {})",
        backend.backend_name(),
        config.store_namespace
    );
    Ok(Storage::new(backend, StorageKeys::new(&config.store_namespace)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobAnalysis;
    use chrono::Utc;

    fn storage() -> Storage {
        Storage::new(Arc::new(memory::MemoryStore::new()), StorageKeys::default())
    }

    fn analysis(id: &str) -> JobAnalysis {
        JobAnalysis {
            id: id.to_string(),
            job_title: "Senior PM".to_string(),
            company: "Acme".to_string(),
            job_description: "We need a product manager".to_string(),
            extracted_role: "Product Manager".to_string(),
            extracted_domain: "Technology".to_string(),
            key_requirements: vec!["Leadership experience".to_string()],
            created_date: Utc::now(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_keys_are_namespaced() {
        let keys = StorageKeys::default();
        assert_eq!(keys.master_resume, "resumepivot_master_resume");
        assert_eq!(keys.versions, "resumepivot_versions");
        assert_eq!(keys.cover_letters, "resumepivot_cover_letters");
        assert_eq!(keys.job_analyses, "resumepivot_job_analyses");
        assert_eq!(keys.current_job_analysis, "resumepivot_current_job_analysis");
        assert_eq!(StorageKeys::new("demo").versions, "demo_versions");
    }

    #[tokio::test]
    async fn test_missing_keys_read_as_empty_defaults() {
        let storage = storage();
        assert!(storage.master_resume().await.unwrap().is_none());
        assert!(storage.versions().await.unwrap().is_empty());
        assert!(storage.cover_letters().await.unwrap().is_empty());
        assert!(storage.current_job_analysis().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_collection_round_trip_is_lossless() {
        let storage = storage();
        let analyses = vec![analysis("b"), analysis("a")];
        storage.save_job_analyses(&analyses).await.unwrap();
        assert_eq!(storage.job_analyses().await.unwrap(), analyses);
    }

    #[tokio::test]
    async fn test_malformed_value_falls_back_to_default() {
        let storage = storage();
        let key = storage.keys.versions.clone();
        storage.backend.set(&key, "{not json".to_string()).await.unwrap();
        assert!(storage.versions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_shape_falls_back_to_default() {
        let storage = storage();
        let key = storage.keys.master_resume.clone();
        storage.backend.set(&key, "[1, 2, 3]".to_string()).await.unwrap();
        assert!(storage.master_resume().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sparse_record_does_not_discard_list() {
        let storage = storage();
        let versions = r#"[
            {"id": "1700000000001", "versionName": "PM - Acme", "targetRole": "Product Manager",
             "createdDate": "2024-03-01T12:30:00.000Z", "lastModified": "2024-03-01T12:30:00.000Z"},
            {"id": "1600000000000"}
        ]"#;
        storage.backend.set(&storage.keys.versions, versions.to_string()).await.unwrap();
        let loaded = storage.versions().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].version_name, "PM - Acme");
        assert_eq!(loaded[1].id, "1600000000000");
        assert_eq!(loaded[1].target_role, "");

        let letters = r#"[{"id": "1600000000002", "content": "Dear team"}]"#;
        storage.backend.set(&storage.keys.cover_letters, letters.to_string()).await.unwrap();
        let loaded = storage.cover_letters().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].content, "Dear team");
        assert_eq!(loaded[0].letter_name, "");
    }

    #[tokio::test]
    async fn test_clear_removes_handoff() {
        let storage = storage();
        storage.set_current_job_analysis(&analysis("temp")).await.unwrap();
        assert!(storage.current_job_analysis().await.unwrap().is_some());
        storage.clear_current_job_analysis().await.unwrap();
        assert!(storage.current_job_analysis().await.unwrap().is_none());
    }
}
